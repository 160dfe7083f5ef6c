#![cfg(target_arch = "wasm32")]
use folio_core::DragController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod page;
mod panels;
mod settings;
mod slideshow;

use page::Page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(settings::load(&document));
    let cards = dom::query_all(&document, constants::CARD_SELECTOR);

    // Cards start parked in the center; the delayed scatter animates out.
    let parked = layout::center_cards(&cards, config.placement.fallback_size);
    let page = Page {
        document: document.clone(),
        cards: Rc::new(cards),
        drag: Rc::new(RefCell::new(DragController::new(&parked, config.drag.clone()))),
        config: config.clone(),
    };

    let frames = frame::FrameLoop::new(page.clone());
    events::wire_drag(&page, &frames);
    events::wire_resize(&page);

    panels::build_project_index(&document);
    panels::wire_project_details(&document);
    panels::wire_nav_bar(&page);
    panels::wire_boxes(&document, &config.timing);
    panels::wire_index_collapse(&document);

    slideshow::wire_all(&document);

    dom::sleep_ms(config.timing.initial_placement_ms).await;
    layout::animate_placement(page).await;
    Ok(())
}
