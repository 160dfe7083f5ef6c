use crate::constants::*;
use crate::dom;
use folio_core::{
    button_visibility, scroll_step, ScrollDirection, ScrollMetrics, SlideCounter,
    SLIDE_VISIBLE_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn metrics(slider: &web::Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: slider.scroll_left() as f64,
        client_width: slider.client_width() as f64,
        scroll_width: slider.scroll_width() as f64,
    }
}

fn scroll_by_page(slider: &web::Element, direction: ScrollDirection) {
    let opts = web::ScrollToOptions::new();
    opts.set_left(scroll_step(direction, slider.client_width() as f64));
    opts.set_behavior(web::ScrollBehavior::Smooth);
    slider.scroll_by_with_scroll_to_options(&opts);
}

/// Wrap every gallery on the page. Returns how many were wired.
pub fn wire_all(document: &web::Document) -> usize {
    let wired = dom::query_all(document, SLIDESHOW_SELECTOR)
        .into_iter()
        .filter(|slider| wire_one(document, slider).is_some())
        .count();
    log::info!("[slideshow] wired {} gallery(ies)", wired);
    wired
}

fn wire_one(document: &web::Document, slider: &web::HtmlElement) -> Option<()> {
    let slider_node: &web::Node = slider;
    let parent = slider.parent_node()?;
    let container = dom::create_with_class(document, "div", &[SLIDESHOW_CONTAINER_CLASS])?;
    parent.insert_before(&container, Some(slider_node)).ok()?;
    container.append_child(slider).ok()?;

    let prev = dom::create_with_class(
        document,
        "button",
        &[SLIDE_BUTTON_CLASS, PREV_BUTTON_CLASS],
    )?;
    prev.set_text_content(Some(PREV_BUTTON_LABEL));
    let next = dom::create_with_class(
        document,
        "button",
        &[SLIDE_BUTTON_CLASS, NEXT_BUTTON_CLASS],
    )?;
    next.set_text_content(Some(NEXT_BUTTON_LABEL));
    container.insert_before(&prev, Some(slider_node)).ok()?;
    container.append_child(&next).ok()?;

    let update: Rc<dyn Fn()> = {
        let slider = slider.clone();
        let prev = prev.clone();
        let next = next.clone();
        Rc::new(move || {
            let vis = button_visibility(metrics(&slider));
            dom::set_class(&prev, CLASS_HIDDEN, vis.prev_hidden);
            dom::set_class(&next, CLASS_HIDDEN, vis.next_hidden);
        })
    };
    update();

    {
        let update = update.clone();
        dom::listen(slider, "scroll", move |_| update());
    }
    if let Some(window) = web::window() {
        let update = update.clone();
        dom::listen(&window, "load", move |_| update());
    }
    {
        let update = update.clone();
        let on_resize = Closure::wrap(Box::new(move || update()) as Box<dyn FnMut()>);
        if let Ok(observer) = web::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            observer.observe(slider);
        }
        on_resize.forget();
    }

    wire_counter(document, &container, slider);

    {
        let slider = slider.clone();
        dom::listen(&prev, "click", move |_| {
            scroll_by_page(&slider, ScrollDirection::Prev)
        });
    }
    {
        let slider = slider.clone();
        dom::listen(&next, "click", move |_| {
            scroll_by_page(&slider, ScrollDirection::Next)
        });
    }
    Some(())
}

fn wire_counter(document: &web::Document, container: &web::Element, slider: &web::HtmlElement) {
    let slides = dom::query_all_in(slider, SLIDE_SELECTOR);
    let Some(counter) = SlideCounter::new(slides.len()) else {
        return;
    };
    let Some(label) = dom::create_with_class(document, "div", &[SLIDE_COUNTER_CLASS]) else {
        return;
    };
    label.set_text_content(Some(&counter.label()));
    if container.append_child(&label).is_err() {
        return;
    }

    let counter = Rc::new(RefCell::new(counter));
    let observed = slides.clone();
    let on_visible = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let node: &web::Node = &target;
            let Some(index) = observed.iter().position(|s| s.is_same_node(Some(node))) else {
                continue;
            };
            let mut c = counter.borrow_mut();
            if c.observe(index, entry.intersection_ratio(), entry.is_intersecting()) {
                label.set_text_content(Some(&c.label()));
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = web::IntersectionObserverInit::new();
    let root: &web::Element = slider;
    init.set_root(Some(root));
    init.set_threshold(&JsValue::from_f64(SLIDE_VISIBLE_THRESHOLD));
    match web::IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for s in &slides {
                observer.observe(s);
            }
        }
        Err(e) => log::error!("[slideshow] intersection observer unavailable: {:?}", e),
    }
    on_visible.forget();
}
