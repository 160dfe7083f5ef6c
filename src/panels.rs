use crate::constants::*;
use crate::dom;
use crate::page::Page;
use folio_core::{BoxToggle, IndexCollapse, NavHighlight, NavIndex, TimingConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Fill `#index-content` with one link per project section.
pub fn build_project_index(document: &web::Document) {
    let Some(index) = document.get_element_by_id(INDEX_CONTENT_ID) else {
        return;
    };
    index.set_inner_html("");
    for section in dom::query_all(document, PROJECT_SECTION_SELECTOR) {
        let title = section
            .query_selector(PROJECT_TITLE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .unwrap_or_default();
        let Ok(link) = document.create_element("a") else {
            continue;
        };
        link.set_text_content(Some(&title));
        dom::listen(&link, "click", move |_| {
            dom::smooth_scroll_into_view(&section)
        });
        _ = index.append_child(&link);
    }
}

/// Clicking a caption expands its project section.
pub fn wire_project_details(document: &web::Document) {
    for detail in dom::query_all(document, PROJECT_DETAILS_SELECTOR) {
        let el = detail.clone();
        dom::listen(&detail, "click", move |_| {
            if let Ok(Some(section)) = el.closest(PROJECT_SECTION_SELECTOR) {
                _ = section.class_list().toggle(CLASS_EXPANDED);
            }
        });
    }
}

fn clicked_link(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

/// Hide -> toggle -> reveal on each info box.
pub fn wire_boxes(document: &web::Document, timing: &TimingConfig) {
    for content in dom::query_all(document, BOX_SELECTOR) {
        let state = Rc::new(RefCell::new(BoxToggle::new(
            content.class_list().contains(CLASS_EXPANDED),
        )));
        let el = content.clone();
        let (hide_ms, reveal_ms) = (timing.box_hide_ms, timing.box_reveal_ms);
        dom::listen(&content, "click", move |ev| {
            if !state.borrow_mut().click(clicked_link(&ev)) {
                return;
            }
            dom::set_class(&el, CLASS_ANIMATING, true);
            dom::set_class(&el, CLASS_CONTENT_HIDDEN, true);

            let state = state.clone();
            let el = el.clone();
            spawn_local(async move {
                dom::sleep_ms(hide_ms).await;
                let toggled = state.borrow_mut().toggle();
                if let Some(expanded) = toggled {
                    dom::set_class(&el, CLASS_EXPANDED, expanded);
                    _ = el.class_list().toggle(CLASS_SNIPPET);
                }
                dom::sleep_ms(reveal_ms).await;
                if state.borrow_mut().reveal() {
                    dom::set_class(&el, CLASS_CONTENT_HIDDEN, false);
                    dom::set_class(&el, CLASS_ANIMATING, false);
                }
            });
        });
    }
}

pub fn wire_index_collapse(document: &web::Document) {
    let Some(list) = document.get_element_by_id(INDEX_LIST_ID) else {
        return;
    };
    let state = Rc::new(Cell::new(IndexCollapse::new(
        list.class_list().contains(CLASS_COLLAPSED),
    )));
    dom::add_click_listener(document, INDEX_TOGGLE_ID, move || {
        let mut s = state.get();
        let collapsed = s.toggle();
        state.set(s);
        dom::set_class(&list, CLASS_COLLAPSED, collapsed);
    });
}

/// One nav entry per card with hover pairing in both directions.
pub fn wire_nav_bar(page: &Page) {
    let Some(bar) = page.document.get_element_by_id(NAV_BAR_ID) else {
        return;
    };
    let nav = NavIndex::new(
        (0..page.cards.len()).map(|i| (page.card_title(i), page.card_target(i))),
    );
    let highlight = Rc::new(RefCell::new(NavHighlight::new(nav.len())));

    for (i, entry) in nav.entries().iter().enumerate() {
        let (Some(item), Some(card)) = (
            dom::create_with_class(&page.document, "span", &[NAV_ITEM_CLASS]),
            page.card(i).cloned(),
        ) else {
            continue;
        };
        item.set_text_content(Some(&entry.title));
        if let Some(target) = &entry.target {
            _ = item.set_attribute(CARD_TARGET_ATTR, target);
        }
        _ = bar.append_child(&item);

        let hovers: [(&web::Element, &str, bool, bool, &web::Element, &'static str); 4] = [
            (&item, "mouseenter", true, true, &card, CLASS_HIGHLIGHT),
            (&item, "mouseleave", true, false, &card, CLASS_HIGHLIGHT),
            (&card, "mouseenter", false, true, &item, CLASS_ACTIVE),
            (&card, "mouseleave", false, false, &item, CLASS_ACTIVE),
        ];
        for (source, event, from_entry, on, other, class) in hovers {
            let highlight = highlight.clone();
            let other = other.clone();
            dom::listen(source, event, move |_| {
                let mut h = highlight.borrow_mut();
                let changed = match (from_entry, on) {
                    (true, true) => h.enter_entry(i),
                    (true, false) => h.leave_entry(i),
                    (false, true) => h.enter_card(i),
                    (false, false) => h.leave_card(i),
                };
                if changed {
                    dom::set_class(&other, class, on);
                }
            });
        }
    }

    // Entry clicks are delegated to the bar and resolved through the index.
    let document = page.document.clone();
    dom::listen(&bar, "click", move |ev| {
        let item = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&format!(".{}", NAV_ITEM_CLASS)).ok().flatten());
        let Some(target) = item.and_then(|el| el.get_attribute(CARD_TARGET_ATTR)) else {
            return;
        };
        if nav.card_for_target(&target).is_some() {
            dom::scroll_to_section(&document, &target);
        }
    });
    log::info!("[nav] {} entr(ies)", page.cards.len());
}
