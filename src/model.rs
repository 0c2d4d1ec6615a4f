use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::ConfigError;

// ────────────────────────────────────────────────────────────────────────────
// Defaults
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_NAME: &str = "Patch Panel";
// Evaluated at compile time.
pub const DEFAULT_PORTS: NonZeroU32 = NonZeroU32::new(48).unwrap();
pub const DEFAULT_ROWS: NonZeroU32 = NonZeroU32::new(2).unwrap();
pub const DEFAULT_GROUP_SIZE: NonZeroU32 = NonZeroU32::new(6).unwrap();
/// Largest port count a config built from user input may carry. Layout holds
/// one slot per port in memory.
pub const MAX_PORTS: u32 = 10_000;

/// Label shown for a port with no label of its own.
pub const UNKNOWN_LABEL: &str = "?";
/// Comment shown for a port that was never documented.
pub const UNDOCUMENTED_COMMENT: &str = "This port has not been documented.";
/// Fill used for the lower body of a documented port without a colour.
pub const DEFAULT_COLOR: &str = "#CCCCCC";
/// Fill used for slots that have no record at all.
pub const UNDOCUMENTED_COLOR: &str = "#FFFFFF";

// ────────────────────────────────────────────────────────────────────────────
// PortRecord
// ────────────────────────────────────────────────────────────────────────────

/// One documented port, as read from a single input line.
///
/// Text fields are kept exactly as written (minus surrounding quotes); escaping
/// for HTML/SVG output is done by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    pub port: u32,
    pub label: String,
    /// Raw colour token including the leading `#`.
    pub color: Option<String>,
    pub comment: String,
}

impl PortRecord {
    /// The synthetic record used for slots nobody documented.
    pub fn placeholder(port: u32) -> Self {
        Self {
            port,
            label: UNKNOWN_LABEL.to_string(),
            color: Some(UNDOCUMENTED_COLOR.to_string()),
            comment: UNDOCUMENTED_COMMENT.to_string(),
        }
    }

    /// True when the record needs display defaults filled in.
    pub fn needs_defaults(&self) -> bool {
        self.label.is_empty()
    }

    /// Copy of this record with display defaults applied: an empty label becomes
    /// `?`, and if the comment is empty too it becomes the undocumented message.
    pub fn with_defaults(&self) -> Self {
        let mut out = self.clone();
        if out.label.is_empty() {
            out.label = UNKNOWN_LABEL.to_string();
            if out.comment.is_empty() {
                out.comment = UNDOCUMENTED_COMMENT.to_string();
            }
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LineError
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineErrorKind {
    /// The line produced no tokens.
    Empty,
    /// The first token is not a valid port number.
    InvalidPort,
}

/// A single input line that could not be turned into a [`PortRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based line number within the input text.
    pub line_number: usize,
    pub line: String,
    pub kind: LineErrorKind,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.kind {
            LineErrorKind::Empty => "no fields",
            LineErrorKind::InvalidPort => "invalid port number",
        };
        write!(f, "line {}: {}: {}", self.line_number, what, self.line)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PanelConfig
// ────────────────────────────────────────────────────────────────────────────

/// Alternate physical numbering schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchMode {
    /// Left to right, then wrap to the next row.
    #[default]
    Sequential,
    /// Row pairs: odd ports on the upper row, even ports on the lower row.
    OddTop,
    /// Row pairs: even ports on the upper row, odd ports on the lower row.
    EvenTop,
}

impl TryFrom<u8> for SwitchMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SwitchMode::Sequential),
            1 => Ok(SwitchMode::OddTop),
            2 => Ok(SwitchMode::EvenTop),
            other => Err(ConfigError::InvalidSwitchMode(other.to_string())),
        }
    }
}

impl std::str::FromStr for SwitchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidSwitchMode(s.to_string()))?;
        SwitchMode::try_from(n)
    }
}

/// Resolved panel attributes. The counts are non-zero by construction, so a
/// config that exists is always valid for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub name: String,
    /// At most [`MAX_PORTS`] when built through [`PanelConfig::new`] or the
    /// attribute parser.
    pub ports: NonZeroU32,
    pub rows: NonZeroU32,
    pub group_size: NonZeroU32,
    pub rotate: bool,
    pub switch_mode: SwitchMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            ports: DEFAULT_PORTS,
            rows: DEFAULT_ROWS,
            group_size: DEFAULT_GROUP_SIZE,
            rotate: false,
            switch_mode: SwitchMode::Sequential,
        }
    }
}

impl PanelConfig {
    /// Build a config from raw counts, rejecting zeros and more than
    /// [`MAX_PORTS`] ports.
    pub fn new(
        name: impl Into<String>,
        ports: u32,
        rows: u32,
        group_size: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            ports: port_count(ports)?,
            rows: non_zero("rows", rows)?,
            group_size: non_zero("groups", group_size)?,
            ..Self::default()
        })
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_switch_mode(mut self, mode: SwitchMode) -> Self {
        self.switch_mode = mode;
        self
    }

    /// `ceil(ports / rows)`.
    pub fn ports_per_row(&self) -> u32 {
        self.ports.get().div_ceil(self.rows.get())
    }

    /// `ceil(ports_per_row / group_size)`.
    pub fn group_count(&self) -> u32 {
        self.ports_per_row().div_ceil(self.group_size.get())
    }
}

pub(crate) fn non_zero(key: &'static str, value: u32) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(value).ok_or(ConfigError::NotPositive { key })
}

pub(crate) fn port_count(value: u32) -> Result<NonZeroU32, ConfigError> {
    if value > MAX_PORTS {
        return Err(ConfigError::TooLarge {
            key: "ports",
            value,
            max: MAX_PORTS,
        });
    }
    non_zero("ports", value)
}

// ────────────────────────────────────────────────────────────────────────────
// PortPlacement
// ────────────────────────────────────────────────────────────────────────────

/// Where one port slot sits on the panel. Row, position and group are 0-based;
/// `x`/`y` are pre-rotation canvas coordinates of the port glyph's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortPlacement {
    pub port: u32,
    pub row: u32,
    pub position: u32,
    pub group: u32,
    pub x: f64,
    pub y: f64,
}
