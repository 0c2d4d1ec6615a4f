//! SVG drawing of a patch panel.
//!
//! The panel is a black rounded rectangle with four mounting holes and its name
//! written vertically at the left edge. Each port is a small nested `<svg>`
//! (an RJ45 jack with the label above and the port number inside the jack)
//! placed at the coordinates computed by [`crate::layout`].

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{tooltip_html, tooltip_text};
use crate::color::fill_for;
use crate::layout::{PORT_HEIGHT, PORT_WIDTH, PanelLayout, PortSlot};
use crate::model::{DEFAULT_COLOR, PanelConfig};

const HOLE_WIDTH: f64 = 30.0;
const HOLE_HEIGHT: f64 = 17.6;
const HOLE_INSET: f64 = 20.0;
const NAME_X: f64 = 80.0;

/// Render a complete, standalone SVG document.
pub fn render_svg(config: &PanelConfig, layout: &PanelLayout<'_>) -> String {
    let mut out = String::with_capacity(1024 + layout.slots.len() * 1400);
    let (width, height) = layout.display_size();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"patchpanel\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    ));
    write_panel(&mut out, config, layout, 1);
    out.push_str("</svg>\n");
    out
}

/// Write the panel body and all ports. Shared by the SVG and HTML renderers.
pub(crate) fn write_panel(out: &mut String, config: &PanelConfig, layout: &PanelLayout<'_>, level: usize) {
    let mut level = level;
    if let Some(transform) = layout.rotation_transform() {
        indent(out, level);
        out.push_str(&format!("<g transform=\"{}\">\n", transform));
        level += 1;
    }

    let w = layout.canvas_width;
    let h = layout.canvas_height;
    indent(out, level);
    out.push_str(&format!(
        "<rect fill=\"#000000\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"30\" ry=\"30\"/>\n",
        w, h
    ));
    for (x, y) in [
        (HOLE_INSET, HOLE_INSET),
        (w - HOLE_INSET - HOLE_WIDTH, HOLE_INSET),
        (HOLE_INSET, h - HOLE_INSET - HOLE_HEIGHT),
        (w - HOLE_INSET - HOLE_WIDTH, h - HOLE_INSET - HOLE_HEIGHT),
    ] {
        indent(out, level);
        out.push_str(&format!(
            "<rect fill=\"#ffffff\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" ry=\"9\"/>\n",
            x, y, HOLE_WIDTH, HOLE_HEIGHT
        ));
    }
    indent(out, level);
    out.push_str(&format!(
        "<text transform=\"rotate(-90 {x},{y})\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\" fill=\"#ffffff\" x=\"{x}\" y=\"{y}\">{}</text>\n",
        encode_text(&config.name),
        x = NAME_X,
        y = h / 2.0
    ));

    for slot in &layout.slots {
        write_port(out, &config.name, slot, level);
    }

    if layout.rotate {
        indent(out, level - 1);
        out.push_str("</g>\n");
    }
}

fn write_port(out: &mut String, panel_name: &str, slot: &PortSlot<'_>, level: usize) {
    let p = &slot.placement;
    let record = &slot.record;
    let fill = fill_for(record.color.as_deref(), DEFAULT_COLOR);

    indent(out, level);
    out.push_str(&format!(
        "<g class=\"port\" data-port=\"{}\" data-caption=\"{}\">\n",
        p.port,
        encode_double_quoted_attribute(&tooltip_html(panel_name, slot))
    ));
    indent(out, level + 1);
    out.push_str(&format!(
        "<title>{}</title>\n",
        encode_text(&tooltip_text(panel_name, slot))
    ));
    indent(out, level + 1);
    out.push_str(&format!(
        "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 200 270\" preserveAspectRatio=\"xMinYMin meet\" class=\"ethernet\">\n",
        p.x, p.y, PORT_WIDTH, PORT_HEIGHT
    ));

    let inner = level + 2;
    // Label plate.
    indent(out, inner);
    out.push_str("<rect x=\"-1\" y=\"0\" width=\"200\" height=\"100\" rx=\"21\" ry=\"21\" stroke-width=\"5\" stroke=\"#000000\" fill=\"#ffffff\"/>\n");
    indent(out, inner);
    out.push_str(&format!(
        "<text x=\"100\" y=\"72\" text-anchor=\"middle\" font-family=\"sans-serif\" font-weight=\"bold\" font-size=\"58\" fill=\"#000000\">{}</text>\n",
        encode_text(&record.label)
    ));
    // Coloured body with the jack opening and its contacts.
    indent(out, inner);
    out.push_str(&format!(
        "<rect x=\"-1\" y=\"100.2\" width=\"200\" height=\"170\" fill=\"{}\"/>\n",
        fill
    ));
    indent(out, inner);
    out.push_str("<rect x=\"24\" y=\"130.2\" width=\"150\" height=\"90\" fill=\"#000000\"/>\n");
    indent(out, inner);
    out.push_str("<rect x=\"59\" y=\"219.2\" width=\"80\" height=\"16\" fill=\"#000000\"/>\n");
    indent(out, inner);
    out.push_str("<rect x=\"74\" y=\"234.2\" width=\"50\" height=\"16\" fill=\"#000000\"/>\n");
    for pin in 0..8 {
        indent(out, inner);
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"132.2\" width=\"6\" height=\"18\" fill=\"#ffff00\"/>\n",
            54 + pin * 12
        ));
    }
    indent(out, inner);
    out.push_str(&format!(
        "<text x=\"100\" y=\"200\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"56\" fill=\"#ffffff\">{}</text>\n",
        p.port
    ));

    indent(out, level + 1);
    out.push_str("</svg>\n");
    indent(out, level);
    out.push_str("</g>\n");
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}
