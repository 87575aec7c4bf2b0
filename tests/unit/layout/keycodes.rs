use super::*;
use crate::layout::grid::{left_fn, left_primary, right_fn, right_primary};

#[test]
fn every_builtin_label_is_mapped() {
    for grid in [left_primary(), left_fn(), right_primary(), right_fn()] {
        for p in grid.placements() {
            let code = resolve(p.label, grid.layer, p.row);
            assert!(
                !code.starts_with("unknown_"),
                "label '{}' has no code",
                p.label
            );
        }
    }
}

#[test]
fn caret_is_ctrl_on_primary_layer() {
    for row in 0..5 {
        assert_eq!(resolve("^", Layer::Primary, row), "retrok_lctrl");
    }
}

#[test]
fn caret_is_up_on_fn_layer_from_row_two() {
    assert_eq!(resolve("^", Layer::Fn, 0), "retrok_lctrl");
    assert_eq!(resolve("^", Layer::Fn, 1), "retrok_lctrl");
    assert_eq!(resolve("^", Layer::Fn, 2), "retrok_up");
    assert_eq!(resolve("^", Layer::Fn, 4), "retrok_up");
}

#[test]
fn builtin_fn_grids_place_both_carets_as_up() {
    for grid in [left_fn(), right_fn()] {
        let caret = grid.placements().find(|p| p.label == CARET).unwrap();
        assert_eq!(resolve(caret.label, grid.layer, caret.row), "retrok_up");
    }
}

#[test]
fn unmapped_label_gets_sentinel() {
    assert_eq!(resolve("Hyper", Layer::Primary, 0), "unknown_Hyper");
    assert_eq!(lookup("Hyper"), None);
}

#[test]
fn fn_key_switches_pages() {
    assert_eq!(lookup("fn"), Some(OVERLAY_NEXT));
}

#[test]
fn table_has_no_duplicate_labels() {
    let mut labels: Vec<_> = KEY_CODES.iter().map(|(l, _)| *l).collect();
    let n = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), n);
}
