use indexmap::IndexMap;

use crate::model::PortRecord;

pub const CSV_HEADER: &str = "Port,Label,Comment";

/// CSV of the documented ports only, in table order. Every field is quoted;
/// embedded double quotes are doubled.
pub fn render_csv(records: &IndexMap<u32, PortRecord>) -> String {
    let mut out = String::with_capacity(32 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records.values() {
        out.push_str(&format!(
            "{},{},{}\n",
            quote(&record.port.to_string()),
            quote(&record.label),
            quote(&record.comment)
        ));
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
