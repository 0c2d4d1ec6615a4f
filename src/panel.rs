//! One render invocation: a panel body plus its configuration.

use std::io::Read;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::Serialize;

use crate::layout::{PanelLayout, layout};
use crate::model::PanelConfig;
use crate::parser::{ParsedPanel, parse_lines};
use crate::render;

/// A parsed panel ready to be laid out and rendered. Owns its records; every
/// layout borrows from it.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub config: PanelConfig,
    #[serde(flatten)]
    pub parsed: ParsedPanel,
    /// False when the body was blank.
    pub has_content: bool,
}

impl Panel {
    pub fn from_text(text: &str, config: PanelConfig) -> Self {
        Self {
            config,
            parsed: parse_lines(text),
            has_content: !text.trim().is_empty(),
        }
    }

    pub fn layout(&self) -> PanelLayout<'_> {
        layout(&self.config, &self.parsed.records)
    }

    pub fn to_svg(&self) -> String {
        render::svg::render_svg(&self.config, &self.layout())
    }

    /// HTML fragment; `id` must be unique among panels on the same page.
    pub fn to_html(&self, id: &str) -> String {
        render::html::render_html(self, id)
    }

    pub fn to_csv(&self) -> String {
        render::csv::render_csv(&self.parsed.records)
    }
}

/// Read a panel body from `path` and parse it with `config`.
pub fn load_panel(path: &Utf8Path, config: PanelConfig) -> Result<Panel> {
    let text =
        std::fs::read_to_string(path.as_std_path()).with_context(|| format!("Failed to read {}", path))?;
    Ok(Panel::from_text(&text, config))
}

/// Like [`load_panel`], but the path `-` reads the body from `stdin` instead.
pub fn load_input<R: Read>(input: &Utf8Path, config: PanelConfig, mut stdin: R) -> Result<Panel> {
    if input.as_str() != STDIN_PATH {
        return load_panel(input, config);
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(Panel::from_text(&text, config))
}

/// Input path standing for standard input.
pub const STDIN_PATH: &str = "-";
