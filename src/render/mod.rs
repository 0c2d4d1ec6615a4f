//! Output formats for a laid-out panel.
//!
//! - [`svg`] – standalone SVG drawing with per-port tooltips
//! - [`html`] – embeddable HTML fragment (SVG, floating tooltip, diagnostics, CSV toggle)
//! - [`csv`] – `Port,Label,Comment` export of the documented ports

pub mod csv;
pub mod html;
pub mod svg;

use html_escape::encode_text;

use crate::layout::PortSlot;

/// Rich tooltip content for one port, as HTML. Label and comment are escaped.
pub fn tooltip_html(panel_name: &str, slot: &PortSlot<'_>) -> String {
    format!(
        "<div class='title'>{} Port {}</div><div class='content'><table>\
         <tr><th>Label:</th><td>{}</td></tr>\
         <tr><th>Comment:</th><td>{}</td></tr></table></div>",
        encode_text(panel_name),
        slot.port(),
        encode_text(&slot.record.label),
        encode_text(&slot.record.comment),
    )
}

/// Plain-text tooltip for one port (unescaped).
pub fn tooltip_text(panel_name: &str, slot: &PortSlot<'_>) -> String {
    format!(
        "{} Port {}\nLabel: {}\nComment: {}",
        panel_name,
        slot.port(),
        slot.record.label,
        slot.record.comment
    )
}
