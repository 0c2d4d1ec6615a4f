//! Deterministic port layout for patch panels.
//!
//! Maps every port slot `1..=ports` of a panel to a row, a position within the
//! row, a visual group and canvas coordinates, and pairs it with the record
//! documenting it (or a placeholder when nobody did).
//!
//! - Rows hold `ceil(ports / rows)` slots each. Positions are 0-based, left to
//!   right.
//! - Every `group_size` positions an extra horizontal gap is inserted, so
//!   groups of ports read as clusters.
//! - Which physical port number sits at a given (row, position) depends on the
//!   [`SwitchMode`]; see [`port_number`].
//! - Rotation is global: coordinates are always reported for the unrotated
//!   canvas and [`PanelLayout::rotation_transform`] gives the transform the
//!   renderer applies once to the whole drawing.
//!
//! The output is ordered by port number, never by geometry.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{PanelConfig, PortPlacement, PortRecord, SwitchMode};

/// Left edge of the first port (leaves room for the mounting holes and name).
pub const BASE_X: f64 = 100.0;
/// Horizontal distance between adjacent ports.
pub const PORT_PITCH_X: f64 = 46.0;
/// Extra horizontal space at each group boundary.
pub const GROUP_GAP_X: f64 = 30.0;
/// Space right of the last port.
pub const RIGHT_MARGIN: f64 = 60.0;
/// Top edge of the first row.
pub const BASE_Y: f64 = 20.0;
/// Vertical distance between rows.
pub const ROW_PITCH_Y: f64 = 66.0;
/// Size of one port glyph.
pub const PORT_WIDTH: f64 = 40.0;
pub const PORT_HEIGHT: f64 = 134.0;

/// One slot of the panel together with the record shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortSlot<'a> {
    pub placement: PortPlacement,
    pub record: Cow<'a, PortRecord>,
    /// False when `record` is the placeholder.
    pub documented: bool,
}

impl PortSlot<'_> {
    pub fn port(&self) -> u32 {
        self.placement.port
    }
}

/// Full layout of one panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout<'a> {
    pub ports_per_row: u32,
    pub group_count: u32,
    /// Canvas size before rotation.
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub rotate: bool,
    /// One entry per port, ascending.
    pub slots: Vec<PortSlot<'a>>,
}

impl PanelLayout<'_> {
    /// Size of the drawing as displayed, i.e. after rotation.
    pub fn display_size(&self) -> (f64, f64) {
        if self.rotate {
            (self.canvas_height, self.canvas_width)
        } else {
            (self.canvas_width, self.canvas_height)
        }
    }

    /// SVG transform turning the canvas a quarter turn clockwise, if rotated.
    pub fn rotation_transform(&self) -> Option<String> {
        self.rotate
            .then(|| format!("translate({} 0) rotate(90)", self.canvas_height))
    }

    pub fn slot(&self, port: u32) -> Option<&PortSlot<'_>> {
        let idx = usize::try_from(port.checked_sub(1)?).ok()?;
        self.slots.get(idx)
    }
}

/// Canvas width for the given shape; never decreases as `ports_per_row` or
/// `group_count` grow.
pub fn canvas_width(ports_per_row: u32, group_count: u32) -> f64 {
    BASE_X + f64::from(ports_per_row) * PORT_PITCH_X + f64::from(group_count) * GROUP_GAP_X
        + RIGHT_MARGIN
}

/// Canvas height for the given number of rows.
pub fn canvas_height(rows: u32) -> f64 {
    BASE_Y + f64::from(rows) * ROW_PITCH_Y
}

/// Physical port number shown at `position` of `row` (both 0-based).
///
/// `Sequential` fills rows left to right and wraps. The switch modes pair rows
/// `(0,1), (2,3), …` and run two interleaved sequences through each pair, one
/// of odd and one of even numbers, each stepping by 2 per position; pair `k`
/// starts at `k * 2 * ports_per_row`. `OddTop` puts the odd sequence on the
/// upper row of the pair, `EvenTop` the even one. A last row without a partner
/// (odd `rows`) is numbered sequentially from its pair's start.
///
/// The result may exceed the panel's port count; such positions stay empty.
pub fn port_number(
    mode: SwitchMode,
    row: u32,
    position: u32,
    ports_per_row: u32,
    rows: u32,
) -> u32 {
    if mode == SwitchMode::Sequential {
        return row
            .saturating_mul(ports_per_row)
            .saturating_add(position)
            .saturating_add(1);
    }
    let base = (row / 2).saturating_mul(ports_per_row.saturating_mul(2));
    let unpaired = rows % 2 == 1 && row + 1 == rows;
    if unpaired {
        return base.saturating_add(position).saturating_add(1);
    }
    let upper = row % 2 == 0;
    let odd = upper == (mode == SwitchMode::OddTop);
    base.saturating_add(position.saturating_mul(2))
        .saturating_add(if odd { 1 } else { 2 })
}

/// Lay out every slot of the panel described by `config`.
pub fn layout<'a>(config: &PanelConfig, records: &'a IndexMap<u32, PortRecord>) -> PanelLayout<'a> {
    let ports = config.ports.get();
    let rows = config.rows.get();
    let group_size = config.group_size.get();
    let ports_per_row = config.ports_per_row();
    let group_count = config.group_count();

    let mut placements: Vec<Option<PortPlacement>> = vec![None; ports as usize];
    for row in 0..rows_in_use(config.switch_mode, ports, ports_per_row, rows) {
        for position in 0..ports_per_row {
            let port = port_number(config.switch_mode, row, position, ports_per_row, rows);
            if port == 0 || port > ports {
                continue;
            }
            let group = position / group_size;
            placements[(port - 1) as usize] = Some(PortPlacement {
                port,
                row,
                position,
                group,
                x: BASE_X + f64::from(position) * PORT_PITCH_X + f64::from(group) * GROUP_GAP_X,
                y: BASE_Y + f64::from(row) * ROW_PITCH_Y,
            });
        }
    }

    let slots: Vec<PortSlot<'a>> = placements
        .into_iter()
        .flatten()
        .map(|placement| PortSlot {
            placement,
            record: resolve_record(records, placement.port),
            documented: records.contains_key(&placement.port),
        })
        .collect();
    debug_assert_eq!(slots.len(), ports as usize, "every slot must be placed");

    for port in records.keys().filter(|&&p| p == 0 || p > ports) {
        tracing::debug!(port, ports, "documented port lies outside the panel");
    }

    PanelLayout {
        ports_per_row,
        group_count,
        canvas_width: canvas_width(ports_per_row, group_count),
        canvas_height: canvas_height(rows),
        rotate: config.rotate,
        slots,
    }
}

/// Number of leading rows that hold at least one port. Rows past it stay empty,
/// so the placement loop never visits more than about `3 * ports` positions
/// however many rows are configured.
fn rows_in_use(mode: SwitchMode, ports: u32, ports_per_row: u32, rows: u32) -> u32 {
    let needed = match mode {
        SwitchMode::Sequential => ports.div_ceil(ports_per_row),
        // Pair `k` starts at port `2 * k * ports_per_row + 1`.
        SwitchMode::OddTop | SwitchMode::EvenTop => ports
            .div_ceil(ports_per_row.saturating_mul(2))
            .saturating_mul(2),
    };
    needed.min(rows)
}

fn resolve_record(records: &IndexMap<u32, PortRecord>, port: u32) -> Cow<'_, PortRecord> {
    match records.get(&port) {
        Some(record) if record.needs_defaults() => Cow::Owned(record.with_defaults()),
        Some(record) => Cow::Borrowed(record),
        None => Cow::Owned(PortRecord::placeholder(port)),
    }
}
