use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels; zero while the window is unavailable.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a handler to the element with `element_id`. Missing elements are
/// logged and skipped.
#[inline]
pub fn add_element_listener<E: JsCast + 'static>(
    document: &web::Document,
    element_id: &str,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => add_listener(&el, event, handler),
        None => log::warn!("[init] missing #{} for {}", element_id, event),
    }
}

pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Smooth scrolling is a CSSOM feature; older engines only jump.
pub fn supports_smooth_scroll(document: &web::Document) -> bool {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| js_sys::Reflect::has(&el.style(), &"scrollBehavior".into()).unwrap_or(false))
        .unwrap_or(false)
}
