use crate::dom;
use crate::page::Page;
use folio_core::REFERENCE_FRAME_SEC;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (background tab) would otherwise teleport a card.
const MAX_FRAME_DT_SEC: f32 = 0.1;

struct Inner {
    running: Cell<bool>,
    last: Cell<Option<Instant>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Single requestAnimationFrame loop advancing every active card animator.
///
/// The loop stops itself once no card is dragging or settling and is
/// restarted by the next pointer-down.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn new(page: Page) -> Self {
        let inner = Rc::new(Inner {
            running: Cell::new(false),
            last: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let now = Instant::now();
            let dt = inner
                .last
                .replace(Some(now))
                .map(|prev| now.duration_since(prev).as_secs_f32())
                .unwrap_or(REFERENCE_FRAME_SEC)
                .min(MAX_FRAME_DT_SEC);

            let motions = page.drag.borrow_mut().tick(dt);
            for (i, m) in motions {
                if let Some(el) = page.card(i) {
                    dom::set_card_position(el, m.position);
                    dom::set_transform(el, m.rotation_deg, m.scale);
                }
            }

            if page.drag.borrow().has_active() {
                request_frame(&inner);
            } else {
                inner.running.set(false);
                inner.last.set(None);
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn ensure_running(&self) {
        if !self.inner.running.replace(true) {
            self.inner.last.set(None);
            request_frame(&self.inner);
        }
    }
}

fn request_frame(inner: &Inner) {
    if let (Some(w), Some(cb)) = (web::window(), inner.tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
