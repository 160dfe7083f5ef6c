use crate::constants::{CLASS_ANIMATING, UI_PANEL_IDS};
use crate::dom;
use crate::frame::FrameLoop;
use crate::page::Page;
use folio_core::{Rect, Release};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Document-level move/up/cancel handlers, attached while a card is held.
struct DocListeners {
    on_move: PointerClosure,
    on_up: PointerClosure,
    on_cancel: PointerClosure,
}

impl DocListeners {
    fn handlers(&self) -> [(&'static str, &PointerClosure); 3] {
        [
            ("pointermove", &self.on_move),
            ("pointerup", &self.on_up),
            ("pointercancel", &self.on_cancel),
        ]
    }

    fn attach(&self, document: &web::Document) {
        for (event, handler) in self.handlers() {
            _ = document.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }

    fn detach(&self, document: &web::Document) {
        for (event, handler) in self.handlers() {
            _ = document
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

#[inline]
fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_drag(page: &Page, frames: &FrameLoop) {
    let listeners: Rc<RefCell<Option<DocListeners>>> = Rc::new(RefCell::new(None));

    let on_move = {
        let page = page.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            ev.prevent_default();
            page.drag.borrow_mut().pointer_move(client_point(&ev));
        }) as Box<dyn FnMut(_)>)
    };

    let on_up = {
        let page = page.clone();
        let listeners = listeners.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(l) = listeners.borrow().as_ref() {
                l.detach(&page.document);
            }
            let release = page.drag.borrow_mut().pointer_up(client_point(&ev));
            if let Some(release) = release {
                finish_release(&page, release);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_cancel = {
        let page = page.clone();
        let listeners = listeners.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if let Some(l) = listeners.borrow().as_ref() {
                l.detach(&page.document);
            }
            let cancelled = page.drag.borrow_mut().pointer_cancel();
            if let Some(el) = cancelled.and_then(|i| page.card(i)) {
                dom::clear_transform(el);
            }
        }) as Box<dyn FnMut(_)>)
    };

    *listeners.borrow_mut() = Some(DocListeners {
        on_move,
        on_up,
        on_cancel,
    });

    for (i, card) in page.cards.iter().enumerate() {
        let page = page.clone();
        let frames = frames.clone();
        let listeners = listeners.clone();
        let el = card.clone();
        dom::listen(card, "pointerdown", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            _ = el.set_pointer_capture(ev.pointer_id());

            dom::set_class(&el, CLASS_ANIMATING, false);
            let origin = dom::card_position(&el);
            let z = page
                .drag
                .borrow_mut()
                .pointer_down(i, origin, client_point(ev));
            if let Some(z) = z {
                dom::set_z_index(&el, z);
                if let Some(l) = listeners.borrow().as_ref() {
                    l.attach(&page.document);
                }
                frames.ensure_running();
            }
        });
    }
    log::info!("[drag] wired {} card(s)", page.cards.len());
}

fn ui_regions(document: &web::Document) -> Vec<Rect> {
    UI_PANEL_IDS
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .map(|el| dom::client_rect(&el))
        .collect()
}

fn finish_release(page: &Page, release: Release) {
    let Some(el) = page.card(release.index) else {
        return;
    };
    let rect = dom::client_rect(el);
    let z = page
        .drag
        .borrow_mut()
        .resolve_release_z(release.index, &rect, &ui_regions(&page.document));
    dom::set_z_index(el, z);

    if release.is_click {
        if let Some(target) = page.card_target(release.index) {
            dom::scroll_to_section(&page.document, &target);
        }
    }
}
