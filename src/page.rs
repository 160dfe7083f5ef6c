use crate::constants::{CARD_TARGET_ATTR, CARD_TITLE_SELECTOR};
use folio_core::{DragController, FolioConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every controller wired onto the page.
#[derive(Clone)]
pub struct Page {
    pub document: web::Document,
    pub cards: Rc<Vec<web::HtmlElement>>,
    pub drag: Rc<RefCell<DragController>>,
    pub config: Rc<FolioConfig>,
}

impl Page {
    pub fn card(&self, index: usize) -> Option<&web::HtmlElement> {
        self.cards.get(index)
    }

    pub fn card_target(&self, index: usize) -> Option<String> {
        self.card(index)?.get_attribute(CARD_TARGET_ATTR)
    }

    /// Title shown in the nav bar: the `alt` of the card's image.
    pub fn card_title(&self, index: usize) -> Option<String> {
        self.card(index)?
            .query_selector(CARD_TITLE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|img| img.get_attribute("alt"))
    }
}
