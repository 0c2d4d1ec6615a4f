//! Embeddable HTML fragment for one panel.
//!
//! Contains a horizontally scrollable container with the SVG drawing, one
//! diagnostic per malformed input line, a floating tooltip fed from each port's
//! `data-caption`, and a toggle revealing the CSV export.

use html_escape::encode_text;

use super::svg::write_panel;
use crate::panel::Panel;

/// Element id for the `index`-th panel on a page named `name`. Only ASCII
/// alphanumerics, `_` and `-` survive, so the id is safe in attributes and
/// script string literals alike.
pub fn element_id(name: &str, index: usize) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("patchpanel_{}_{}", index, slug)
}

pub fn render_html(panel: &Panel, id: &str) -> String {
    let id = sanitize_id(id);
    let layout = panel.layout();
    let (width, height) = layout.display_size();
    let mut out = String::with_capacity(2048 + layout.slots.len() * 1600);

    if !panel.has_content {
        out.push_str("<p class=\"patchpanel_empty\">No data found</p>\n");
    }
    for err in &panel.parsed.errors {
        out.push_str(&format!(
            "<div class=\"patchpanel_error\">Syntax error on line {}: <pre style=\"color:red\">{}</pre></div>\n",
            err.line_number,
            encode_text(&err.line)
        ));
    }

    out.push_str(&format!(
        "<div class=\"patchpanel\" id=\"{id}_panel\" style=\"display:block;line-height:0;overflow-x:auto;overflow-y:hidden;width:100%;\">\n"
    ));
    out.push_str(&format!(
        "<div style=\"width:{}px;height:{}px;\">\n",
        width, height
    ));
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" style=\"line-height:0px;\">\n",
        w = width,
        h = height
    ));
    write_panel(&mut out, &panel.config, &layout, 1);
    out.push_str("</svg>\n</div>\n</div>\n");

    out.push_str(&format!(
        "<div class=\"patchpanel_csv\"><span onclick=\"var e=document.getElementById('{id}_csv');var v=e.style.display=='none';e.style.display=v?'block':'none';this.innerHTML=v?'Hide CSV &uarr;':'Show CSV &darr;';\">Show CSV &darr;</span></div>\n"
    ));
    out.push_str(&format!(
        "<pre style=\"display:none;\" id=\"{id}_csv\">{}</pre>\n",
        encode_text(&panel.to_csv())
    ));
    out.push_str(&tooltip_script(&id));
    out
}

fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

fn tooltip_script(id: &str) -> String {
    format!(
        r#"<script type="text/javascript">
(function() {{
  var tip = document.getElementById('patchpanel_tooltip');
  if (!tip) {{
    tip = document.createElement('div');
    tip.id = 'patchpanel_tooltip';
    tip.style.cssText = 'position:fixed;display:none;z-index:1000;background:#fff;border:1px solid #000;padding:4px;line-height:normal;';
    document.body.appendChild(tip);
  }}
  var root = document.getElementById('{id}_panel');
  if (!root) return;
  root.querySelectorAll('g.port').forEach(function(g) {{
    var title = g.querySelector('title');
    if (title) title.remove();
    g.addEventListener('mousemove', function(evt) {{
      tip.innerHTML = g.getAttribute('data-caption');
      tip.style.left = (evt.clientX + 10) + 'px';
      tip.style.top = (evt.clientY + 10) + 'px';
      tip.style.display = 'block';
    }});
    g.addEventListener('mouseout', function() {{
      tip.style.display = 'none';
    }});
  }});
}})();
</script>
"#
    )
}
