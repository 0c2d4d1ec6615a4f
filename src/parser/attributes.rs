//! Panel attribute strings such as `name="Core Switch" ports=24 rows=2 switch=1`.

use super::tokenizer::{scan_quoted, trim_quotes, unquote};
use crate::error::{ConfigError, Result};
use crate::model::{PanelConfig, SwitchMode, non_zero, port_count};

/// Parse an attribute string on top of the defaults.
pub fn parse_attributes(s: &str) -> Result<PanelConfig> {
    apply_attributes(PanelConfig::default(), s)
}

/// Parse an attribute string, overriding only the fields of `config` it mentions.
pub fn apply_attributes(mut config: PanelConfig, s: &str) -> Result<PanelConfig> {
    for token in split_attributes(s) {
        let Some((key, value)) = token.split_once('=') else {
            tracing::warn!(token, "ignoring panel attribute without a value");
            continue;
        };
        match key {
            "name" => config.name = parse_name(value),
            "ports" => config.ports = port_count(parse_number("ports", value)?)?,
            "rows" => config.rows = non_zero("rows", parse_number("rows", value)?)?,
            "groups" => config.group_size = non_zero("groups", parse_number("groups", value)?)?,
            "rotate" => config.rotate = parse_flag("rotate", value)?,
            "switch" => config.switch_mode = trim_quotes(value).parse::<SwitchMode>()?,
            _ => tracing::warn!(key, "ignoring unknown panel attribute"),
        }
    }
    Ok(config)
}

/// Individual settings layered on top of an attribute string; every `Some`
/// wins over whatever the attributes said.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub ports: Option<u32>,
    pub rows: Option<u32>,
    pub groups: Option<u32>,
    pub rotate: Option<bool>,
    pub switch_mode: Option<SwitchMode>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: PanelConfig) -> Result<PanelConfig> {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(ports) = self.ports {
            config.ports = port_count(ports)?;
        }
        if let Some(rows) = self.rows {
            config.rows = non_zero("rows", rows)?;
        }
        if let Some(groups) = self.groups {
            config.group_size = non_zero("groups", groups)?;
        }
        if let Some(rotate) = self.rotate {
            config.rotate = rotate;
        }
        if let Some(mode) = self.switch_mode {
            config.switch_mode = mode;
        }
        Ok(config)
    }
}

/// Defaults, then the attribute string (if any), then `overrides`.
pub fn resolve_config(attrs: Option<&str>, overrides: &ConfigOverrides) -> Result<PanelConfig> {
    let config = match attrs {
        Some(attrs) => parse_attributes(attrs)?,
        None => PanelConfig::default(),
    };
    overrides.apply(config)
}

/// Split into `key="quoted value"` spans and bare non-whitespace runs.
pub fn split_attributes(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = s.trim_start();
    while !rest.is_empty() {
        let len = quoted_pair_len(rest)
            .unwrap_or_else(|| rest.find(char::is_whitespace).unwrap_or(rest.len()));
        out.push(&rest[..len]);
        rest = rest[len..].trim_start();
    }
    out
}

fn quoted_pair_len(s: &str) -> Option<usize> {
    let key_len = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    let after_key = &s[key_len..];
    let quoted = after_key.strip_prefix('=')?;
    scan_quoted(quoted).map(|q| key_len + 1 + q)
}

/// A closed quoted span is unescaped as is; anything else loses its outer quotes.
fn parse_name(value: &str) -> String {
    if value.starts_with('"') && scan_quoted(value) == Some(value.len()) {
        unquote(value)
    } else {
        trim_quotes(value).to_string()
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u32> {
    trim_quotes(value)
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
    match trim_quotes(value) {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
