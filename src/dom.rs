use folio_core::{
    format_px, inline_offset_or, size_or_fallback, transform_css, Rect, Size, Viewport,
};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a listener for the page's lifetime.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds. Returns the timer handle.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

/// Resolve after `ms` milliseconds on the event loop.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

fn node_list_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Layout size of a card, with the fallback for unmeasured elements.
pub fn measure_size(el: &web::HtmlElement, fallback: f32) -> Size {
    Size::new(
        size_or_fallback(el.offset_width() as f32, fallback),
        size_or_fallback(el.offset_height() as f32, fallback),
    )
}

pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Current inline position, falling back to the layout offset.
pub fn card_position(el: &web::HtmlElement) -> Vec2 {
    let style = el.style();
    let inline = |prop: &str| style.get_property_value(prop).unwrap_or_default();
    Vec2::new(
        inline_offset_or(&inline("left"), el.offset_left() as f32),
        inline_offset_or(&inline("top"), el.offset_top() as f32),
    )
}

pub fn set_card_position(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format_px(pos.x));
    _ = style.set_property("top", &format_px(pos.y));
}

pub fn set_transform(el: &web::HtmlElement, rotation_deg: f32, scale: f32) {
    _ = el
        .style()
        .set_property("transform", &transform_css(rotation_deg, scale));
}

pub fn clear_transform(el: &web::HtmlElement) {
    _ = el.style().set_property("transform", "none");
}

pub fn set_z_index(el: &web::HtmlElement, z: i32) {
    _ = el.style().set_property("z-index", &z.to_string());
}

pub fn reveal(el: &web::HtmlElement) {
    _ = el.style().set_property("visibility", "visible");
}

pub fn smooth_scroll_into_view(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll to the section with `id`; silently skipped when absent.
pub fn scroll_to_section(document: &web::Document, id: &str) {
    if let Some(section) = document.get_element_by_id(id) {
        log::debug!("[scroll] to #{}", id);
        smooth_scroll_into_view(&section);
    }
}

pub fn create_with_class(
    document: &web::Document,
    tag: &str,
    classes: &[&str],
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    for c in classes {
        _ = el.class_list().add_1(c);
    }
    Some(el)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}
