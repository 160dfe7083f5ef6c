use crate::dom;
use crate::layout;
use crate::page::Page;
use folio_core::Debouncer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Re-run placement once resizing has been quiet for the debounce window.
pub fn wire_resize(page: &Page) {
    let Some(window) = web::window() else {
        return;
    };
    let debouncer = Rc::new(RefCell::new(Debouncer::new()));
    let delay = page.config.timing.resize_debounce_ms;
    let page = page.clone();
    dom::listen(&window, "resize", move |_| {
        let ticket = debouncer.borrow_mut().trigger();
        let debouncer = debouncer.clone();
        let page = page.clone();
        dom::set_timeout(delay, move || {
            if debouncer.borrow().is_latest(ticket) {
                spawn_local(layout::animate_placement(page));
            }
        });
    });
}
