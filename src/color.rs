/// Validate a `#RGB` or `#RRGGBB` colour token and return it lower-cased.
///
/// Anything else (named colours, `#RRGGBBAA`, stray characters) is rejected so
/// that only well-formed values end up inside SVG attributes.
pub fn parse_hex_color(val: &str) -> Option<String> {
    let val = val.trim();
    let hex = val.strip_prefix('#')?;
    if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", hex.to_ascii_lowercase()))
}

/// Colour to paint a port with: the record's own colour if valid, else `fallback`.
pub fn fill_for(color: Option<&str>, fallback: &str) -> String {
    match color {
        Some(c) => parse_hex_color(c).unwrap_or_else(|| {
            tracing::warn!(color = c, "invalid port colour, using default");
            fallback.to_ascii_lowercase()
        }),
        None => fallback.to_ascii_lowercase(),
    }
}
