//! Patch panel diagrams from plain-text port listings.
//!
//! A panel body is a list of lines like `12 "Server A" #07c uplink to core`.
//! [`parser::parse_lines`] turns it into port records, [`layout::layout`]
//! places every port slot of the panel on a canvas, and the [`render`] module
//! produces SVG, HTML or CSV from the result. [`panel::Panel`] ties the steps
//! together for a single panel.
//!
//! The binary `patchpanel` renders listing files from the command line.

pub mod batch;
pub mod color;
pub mod error;
pub mod layout;
pub mod model;
pub mod panel;
pub mod parser;
pub mod render;

pub use batch::{OutputPlan, plan_outputs};
pub use error::ConfigError;
pub use layout::{PanelLayout, PortSlot, layout, port_number};
pub use model::{LineError, PanelConfig, PortPlacement, PortRecord, SwitchMode};
pub use panel::Panel;
pub use parser::{ConfigOverrides, ParsedPanel, parse_lines, resolve_config};
