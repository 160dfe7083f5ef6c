// Host-side tests for tuning constants and document hooks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn drag_tuning_is_within_reasonable_bounds() {
    // Lerp default must sit inside the tunable window
    assert!(tuning::DRAG_LERP >= tuning::DRAG_LERP_MIN);
    assert!(tuning::DRAG_LERP <= tuning::DRAG_LERP_MAX);
    assert!(tuning::DRAG_LERP_MAX < 1.0);

    assert!(tuning::MAX_ROTATION_DEG > 0.0 && tuning::MAX_ROTATION_DEG <= 15.0);
    assert!(tuning::DRAG_SCALE > 1.0);
    assert!(tuning::SETTLE_EPSILON_PX > 0.0);
    assert!(tuning::MAX_SETTLE_FRAMES > 0);
    assert!(tuning::CLICK_THRESHOLD_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stacking_layers_are_ordered() {
    // Dragged cards start above page content and released-under-UI cards
    // sit above any freshly raised one
    assert!(tuning::STACK_Z_BASE < tuning::Z_START);
    assert!(tuning::Z_START < tuning::Z_BEHIND_UI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn placement_fractions_are_fractions() {
    assert!(tuning::MAX_OVERLAP_FRACTION > 0.0 && tuning::MAX_OVERLAP_FRACTION < 1.0);
    assert!(tuning::STACK_OVERLAP_FACTOR > 0.0 && tuning::STACK_OVERLAP_FACTOR < 1.0);
    assert!(tuning::MAX_PLACEMENT_ATTEMPTS > 0);
    assert!(tuning::FALLBACK_SIZE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_is_positive() {
    assert!(tuning::INITIAL_PLACEMENT_DELAY_MS > 0);
    assert!(tuning::RESIZE_DEBOUNCE_MS > tuning::INITIAL_PLACEMENT_DELAY_MS);
    assert!(tuning::REPOSITION_ANIMATION_MS > tuning::RESIZE_DEBOUNCE_MS);
}

#[test]
fn class_selectors_are_prefixed() {
    for sel in [
        CARD_SELECTOR,
        PROJECT_SECTION_SELECTOR,
        PROJECT_DETAILS_SELECTOR,
        BOX_SELECTOR,
        SLIDESHOW_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        HERO_PANEL_ID,
        INDEX_PANEL_ID,
        STACK_ANCHOR_ID,
        INDEX_CONTENT_ID,
        INDEX_LIST_ID,
        INDEX_TOGGLE_ID,
        NAV_BAR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(UI_PANEL_IDS, [HERO_PANEL_ID, INDEX_PANEL_ID]);
}
