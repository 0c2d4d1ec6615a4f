use indexmap::IndexMap;
use patchpanel::layout::{BASE_X, BASE_Y, GROUP_GAP_X, PORT_PITCH_X, ROW_PITCH_Y};
use patchpanel::model::{UNDOCUMENTED_COMMENT, UNKNOWN_LABEL};
use patchpanel::{PanelConfig, PortRecord, SwitchMode, layout, parse_lines};

fn config(ports: u32, rows: u32, groups: u32) -> PanelConfig {
    PanelConfig::new("Test", ports, rows, groups).unwrap()
}

fn no_records() -> IndexMap<u32, PortRecord> {
    IndexMap::new()
}

#[test]
fn every_slot_once_in_ascending_order() {
    let records = no_records();
    for mode in [SwitchMode::Sequential, SwitchMode::OddTop, SwitchMode::EvenTop] {
        for ports in 1..=30 {
            for rows in 1..=5 {
                for groups in [1, 4, 6] {
                    let cfg = config(ports, rows, groups).with_switch_mode(mode);
                    let out = layout(&cfg, &records);
                    let numbers: Vec<u32> = out.slots.iter().map(|s| s.port()).collect();
                    let expected: Vec<u32> = (1..=ports).collect();
                    assert_eq!(numbers, expected, "{:?} ports={} rows={}", mode, ports, rows);
                }
            }
        }
    }
}

#[test]
fn sequential_rows_are_contiguous_bands() {
    let records = no_records();
    let out = layout(&config(10, 3, 6), &records);
    assert_eq!(out.ports_per_row, 4);
    let rows: Vec<(u32, u32)> = out
        .slots
        .iter()
        .map(|s| (s.placement.row, s.placement.position))
        .collect();
    assert_eq!(
        rows,
        vec![
            (0, 0), (0, 1), (0, 2), (0, 3),
            (1, 0), (1, 1), (1, 2), (1, 3),
            (2, 0), (2, 1),
        ]
    );
}

#[test]
fn coordinates_follow_pitch_and_group_gaps() {
    let records = no_records();
    let out = layout(&config(48, 2, 6), &records);
    let p1 = &out.slots[0].placement;
    assert_eq!((p1.x, p1.y), (BASE_X, BASE_Y));

    let p7 = &out.slots[6].placement;
    assert_eq!(p7.group, 1);
    assert_eq!(p7.x, BASE_X + 6.0 * PORT_PITCH_X + GROUP_GAP_X);

    let p25 = &out.slots[24].placement;
    assert_eq!((p25.row, p25.position), (1, 0));
    assert_eq!(p25.y, BASE_Y + ROW_PITCH_Y);
}

#[test]
fn ports_in_a_row_never_overlap() {
    let records = no_records();
    for mode in [SwitchMode::Sequential, SwitchMode::OddTop, SwitchMode::EvenTop] {
        let out = layout(&config(37, 3, 5).with_switch_mode(mode), &records);
        for a in &out.slots {
            for b in &out.slots {
                let (pa, pb) = (&a.placement, &b.placement);
                if pa.row == pb.row && pa.position < pb.position {
                    assert!(pa.x < pb.x);
                    assert_eq!(pa.y, pb.y);
                }
            }
        }
    }
}

#[test]
fn group_boundary_adds_exactly_one_gap() {
    let records = no_records();
    let out = layout(&config(12, 1, 4), &records);
    let xs: Vec<f64> = out.slots.iter().map(|s| s.placement.x).collect();
    for pair in xs.windows(2).enumerate() {
        let (i, w) = pair;
        let step = w[1] - w[0];
        let next_position = i + 1;
        if next_position % 4 == 0 {
            assert_eq!(step, PORT_PITCH_X + GROUP_GAP_X);
        } else {
            assert_eq!(step, PORT_PITCH_X);
        }
    }
}

#[test]
fn canvas_grows_monotonically() {
    let records = no_records();
    for rows in 1..=4 {
        let mut last_width = 0.0;
        for ports in 1..=64 {
            let out = layout(&config(ports, rows, 6), &records);
            assert!(out.canvas_width >= last_width);
            last_width = out.canvas_width;
        }
    }
    for ports in [1, 8, 48] {
        let mut last_height = 0.0;
        for rows in 1..=6 {
            let out = layout(&config(ports, rows, 6), &records);
            assert!(out.canvas_height >= last_height);
            last_height = out.canvas_height;
        }
    }
}

#[test]
fn canvas_size_of_default_panel() {
    let records = no_records();
    let out = layout(&PanelConfig::default(), &records);
    assert_eq!(out.ports_per_row, 24);
    assert_eq!(out.group_count, 4);
    assert_eq!(out.canvas_width, 100.0 + 24.0 * 46.0 + 4.0 * 30.0 + 60.0);
    assert_eq!(out.canvas_height, 20.0 + 2.0 * 66.0);
}

#[test]
fn undocumented_slots_get_placeholder() {
    let parsed = parse_lines(r#"1 "Server A" #07c uplink to core"#);
    let out = layout(&config(4, 1, 6), &parsed.records);
    assert_eq!(out.slots.len(), 4);
    assert!(out.slots[0].documented);
    assert_eq!(out.slots[0].record.label, "Server A");
    for slot in &out.slots[1..] {
        assert!(!slot.documented);
        assert_eq!(slot.record.label, UNKNOWN_LABEL);
        assert_eq!(slot.record.comment, UNDOCUMENTED_COMMENT);
        assert_eq!(slot.record.port, slot.port());
        assert!(slot.record.color.is_some());
    }
}

#[test]
fn empty_label_defaults_are_applied_at_layout() {
    let parsed = parse_lines("1\n2 \"\" #f00 has comment");
    let out = layout(&config(2, 1, 6), &parsed.records);
    assert_eq!(out.slots[0].record.label, UNKNOWN_LABEL);
    assert_eq!(out.slots[0].record.comment, UNDOCUMENTED_COMMENT);
    assert_eq!(out.slots[1].record.label, UNKNOWN_LABEL);
    assert_eq!(out.slots[1].record.comment, "has comment");
    assert_eq!(out.slots[1].record.color.as_deref(), Some("#f00"));
    // The parsed table itself is untouched.
    assert_eq!(parsed.records[&1].label, "");
}

#[test]
fn records_outside_the_panel_are_not_placed() {
    let parsed = parse_lines("0 zero\n3 inside\n9 outside");
    let out = layout(&config(4, 2, 6), &parsed.records);
    assert_eq!(out.slots.len(), 4);
    assert_eq!(out.slot(3).map(|s| s.record.label.as_str()), Some("inside"));
    assert!(out.slot(0).is_none());
    assert!(out.slot(9).is_none());
}

#[test]
fn rotation_swaps_display_size_only() {
    let records = no_records();
    let flat = layout(&config(24, 2, 6), &records);
    let turned = layout(&config(24, 2, 6).with_rotate(true), &records);
    assert_eq!(flat.rotation_transform(), None);
    assert_eq!(
        turned.display_size(),
        (flat.canvas_height, flat.canvas_width)
    );
    assert_eq!(
        turned.rotation_transform().as_deref(),
        Some("translate(152 0) rotate(90)")
    );
    let flat_xy: Vec<(f64, f64)> = flat.slots.iter().map(|s| (s.placement.x, s.placement.y)).collect();
    let turned_xy: Vec<(f64, f64)> = turned.slots.iter().map(|s| (s.placement.x, s.placement.y)).collect();
    assert_eq!(flat_xy, turned_xy);
}

#[test]
fn huge_row_count_only_walks_rows_with_ports() {
    let records = no_records();
    let cfg = config(1, 4_000_000_000, 6);
    let out = layout(&cfg, &records);
    assert_eq!(out.slots.len(), 1);
    assert_eq!(out.slots[0].placement.row, 0);
    assert_eq!(out.slots[0].placement.position, 0);
}

#[test]
fn surplus_rows_do_not_change_placement() {
    let records = no_records();
    let expected_rows = [
        (SwitchMode::Sequential, vec![0, 1, 2, 3, 4]),
        (SwitchMode::OddTop, vec![0, 1, 2, 3, 4]),
        (SwitchMode::EvenTop, vec![1, 0, 3, 2, 4]),
    ];
    for (mode, rows) in expected_rows {
        let cfg = config(5, 1_000_000, 6).with_switch_mode(mode);
        let out = layout(&cfg, &records);
        let numbers: Vec<u32> = out.slots.iter().map(|s| s.port()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5], "{:?}", mode);
        let placed: Vec<u32> = out.slots.iter().map(|s| s.placement.row).collect();
        assert_eq!(placed, rows, "{:?}", mode);
    }
}
