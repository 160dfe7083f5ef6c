use crate::constants::{CLASS_ANIMATING, STACK_ANCHOR_ID};
use crate::dom;
use crate::page::Page;
use folio_core::{place, DeviceClass, Viewport};
use glam::Vec2;
use web_sys as web;

/// Park every card in the middle of the viewport with transitions enabled,
/// so the first scatter animates outward. Returns the parked positions.
pub fn center_cards(cards: &[web::HtmlElement], fallback: f32) -> Vec<Vec2> {
    let viewport = dom::viewport().unwrap_or(Viewport::new(0.0, 0.0));
    cards
        .iter()
        .map(|el| {
            let pos = viewport.centered(dom::measure_size(el, fallback));
            dom::set_card_position(el, pos);
            dom::set_class(el, CLASS_ANIMATING, true);
            pos
        })
        .collect()
}

/// Run the placement engine and write the result to every idle card.
pub fn apply_placement(page: &Page) {
    let Some(viewport) = dom::viewport() else {
        return;
    };
    let cfg = &page.config.placement;
    let sizes: Vec<_> = page
        .cards
        .iter()
        .map(|el| dom::measure_size(el, cfg.fallback_size))
        .collect();
    let anchor_bottom = page
        .document
        .get_element_by_id(STACK_ANCHOR_ID)
        .map(|el| dom::client_rect(&el).bottom());

    let (class, placements) = place(
        &sizes,
        viewport,
        anchor_bottom,
        cfg,
        &mut rand::thread_rng(),
    );

    let mut drag = page.drag.borrow_mut();
    let mut exhausted = 0;
    for (i, (el, p)) in page.cards.iter().zip(&placements).enumerate() {
        // A held or settling card belongs to the frame loop.
        if drag.is_active(i) {
            continue;
        }
        dom::set_card_position(el, p.position);
        dom::clear_transform(el);
        if let Some(z) = p.z_index {
            dom::set_z_index(el, z);
        }
        dom::reveal(el);
        exhausted += usize::from(p.budget_exhausted);
    }
    let positions: Vec<Vec2> = placements.iter().map(|p| p.position).collect();
    drag.reset_positions(&positions);

    let mode = match class {
        DeviceClass::Mobile => "stack",
        DeviceClass::Desktop => "scatter",
    };
    log::info!(
        "[layout] {} {} card(s) in {}x{} ({} overlapping)",
        mode,
        placements.len(),
        viewport.width,
        viewport.height,
        exhausted
    );
}

/// Placement with the reposition transition enabled for its duration.
/// Held or settling cards keep transitions off.
pub async fn animate_placement(page: Page) {
    set_idle_animating(&page, true);
    apply_placement(&page);
    dom::sleep_ms(page.config.timing.reposition_animation_ms).await;
    set_idle_animating(&page, false);
}

fn set_idle_animating(page: &Page, on: bool) {
    let drag = page.drag.borrow();
    for (i, el) in page.cards.iter().enumerate() {
        if !drag.is_active(i) {
            dom::set_class(el, CLASS_ANIMATING, on);
        }
    }
}
