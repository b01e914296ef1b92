// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_distinct() {
    let mut ids = vec![
        DIAL_CANVAS_ID,
        ROTATION_INPUT_ID,
        MAPPING_TEXT_ID,
        OVERLAY_TEXT_ID,
        SCALE_BUTTONS_ID,
        CHORD_BUTTONS_ID,
        REFERENCE_PANEL_ID,
        OVERLAY_PANEL_ID,
    ];
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn colors_are_hex() {
    for c in [
        NATURAL_FILL,
        ACCIDENTAL_FILL,
        INNER_NATURAL_FILL,
        INNER_ACCIDENTAL_FILL,
        HIGHLIGHT_NATURAL_FILL,
        HIGHLIGHT_ACCIDENTAL_FILL,
        WEDGE_STROKE,
        SELECTED_STROKE,
        LABEL_COLOR,
        BACKGROUND,
    ] {
        assert!(c.starts_with('#') && c.len() == 7, "{c}");
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()), "{c}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn selected_outline_is_heavier_than_wedge_outline() {
    assert!(SELECTED_STROKE_WIDTH > WEDGE_STROKE_WIDTH);
    assert!(WEDGE_STROKE_WIDTH > 0.0);
}

#[test]
fn attributes_are_data_attributes() {
    for a in [MODE_ATTRIBUTE, ACTION_ATTRIBUTE, OVERLAY_NAME_ATTRIBUTE] {
        assert!(a.starts_with("data-"), "{a}");
    }
}
