// Host-side tests for info box toggles, the index collapse and nav pairing.

use folio_core::{BoxStage, BoxToggle, IndexCollapse, NavHighlight, NavIndex};

#[test]
fn box_click_toggles_exactly_once() {
    let mut b = BoxToggle::new(false);
    assert!(b.click(false));
    assert_eq!(b.stage(), BoxStage::Hiding);

    // Clicks during the sequence are debounced.
    assert!(!b.click(false));
    assert_eq!(b.toggle(), Some(true));
    assert!(!b.click(false));
    assert!(b.reveal());

    assert!(b.expanded());
    assert!(!b.is_animating());

    assert!(b.click(false));
    assert_eq!(b.toggle(), Some(false));
    assert!(b.reveal());
    assert!(!b.expanded());
}

#[test]
fn link_clicks_do_not_toggle() {
    let mut b = BoxToggle::new(true);
    assert!(!b.click(true));
    assert_eq!(b.stage(), BoxStage::Resting);
    assert!(b.expanded());
}

#[test]
fn sequence_steps_out_of_order_are_ignored() {
    let mut b = BoxToggle::default();
    assert_eq!(b.toggle(), None);
    assert!(!b.reveal());
    assert!(b.click(false));
    assert!(!b.reveal());
    assert_eq!(b.toggle(), Some(true));
    assert_eq!(b.toggle(), None);
}

#[test]
fn index_collapse_flips() {
    let mut c = IndexCollapse::new(false);
    assert!(c.toggle());
    assert!(c.collapsed());
    assert!(!c.toggle());
}

#[test]
fn nav_index_titles_and_lookup() {
    let nav = NavIndex::new(vec![
        (Some("Tidepool".to_string()), Some("proj-tide".to_string())),
        (Some("  ".to_string()), Some("proj-kiln".to_string())),
        (None, None),
        (Some("Tidepool again".to_string()), Some("proj-tide".to_string())),
    ]);
    let titles: Vec<&str> = nav.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Tidepool", "proj-kiln", "Project 3", "Tidepool again"]);
    assert_eq!(nav.card_for_target("proj-tide"), Some(0));
    assert_eq!(nav.card_for_target("proj-kiln"), Some(1));
    assert_eq!(nav.card_for_target("missing"), None);
    assert_eq!(nav.len(), 4);
}

#[test]
fn hover_pairs_are_independent() {
    let mut h = NavHighlight::new(3);
    assert!(h.enter_entry(1));
    assert!(!h.enter_entry(1));
    assert!(h.card_highlighted(1));
    assert!(!h.entry_active(1));

    assert!(h.enter_card(2));
    assert!(h.entry_active(2));
    assert!(h.leave_card(2));
    assert!(!h.entry_active(2));

    assert!(h.leave_entry(1));
    assert!(!h.card_highlighted(1));
    assert!(!h.enter_entry(9));
}
