use crate::dom;
use crate::frame::AppHandle;
use crate::markup::{
    CARD_SELECTOR, EVASIVE_SELECTOR, ID_CONTINUE, ID_NO, ID_OPEN, ID_PHOTO, ID_REVEAL, ID_SCENES,
    ID_YES,
};
use crate::render;
use glam::Vec2;
use valentine_core::{Area, ClickTarget};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(document: &web::Document, handle: &AppHandle) {
    wire_global_keydown(handle);
    wire_scenes_container(document, handle);
    wire_narrative_buttons(document, handle);
    wire_yes_button(document, handle);
    wire_no_button(document, handle);
    wire_photo(document, handle);
}

pub fn wire_global_keydown(handle: &AppHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let h = handle.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        let now = h.now();
        let handled = {
            let mut host = h.host.borrow_mut();
            h.app.borrow_mut().key(&ev.key(), &mut *host, now)
        };
        if handled {
            ev.prevent_default();
        }
    });
}

fn wire_scenes_container(document: &web::Document, handle: &AppHandle) {
    let Some(scenes) = document.get_element_by_id(ID_SCENES) else {
        log::warn!("[init] missing #{}", ID_SCENES);
        return;
    };

    let h = handle.clone();
    let container = scenes.clone();
    dom::add_listener(&scenes, "scroll", move |_: web::Event| {
        let viewport = dom::viewport_size();
        h.app
            .borrow_mut()
            .scroll(container.scroll_top() as f64, viewport.y as f64);
    });

    let h = handle.clone();
    dom::add_listener(&scenes, "click", move |ev: web::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let inside = |sel: &str| target.closest(sel).ok().flatten().is_some();
        let kind = ClickTarget::classify(
            &target.tag_name(),
            inside(CARD_SELECTOR),
            inside(EVASIVE_SELECTOR),
        );
        let now = h.now();
        let mut host = h.host.borrow_mut();
        h.app.borrow_mut().click(kind, &mut *host, now);
    });
}

fn wire_narrative_buttons(document: &web::Document, handle: &AppHandle) {
    let h = handle.clone();
    dom::add_element_listener(document, ID_OPEN, "click", move |_: web::MouseEvent| {
        let now = h.now();
        let mut host = h.host.borrow_mut();
        h.app.borrow_mut().open(&mut *host, now);
    });

    let h = handle.clone();
    dom::add_element_listener(document, ID_CONTINUE, "click", move |_: web::MouseEvent| {
        let now = h.now();
        let mut host = h.host.borrow_mut();
        h.app.borrow_mut().continue_letter(&mut *host, now);
    });

    let h = handle.clone();
    dom::add_element_listener(document, ID_REVEAL, "click", move |_: web::MouseEvent| {
        let now = h.now();
        let mut host = h.host.borrow_mut();
        h.app.borrow_mut().reveal(&mut *host, now);
    });
}

fn wire_yes_button(document: &web::Document, handle: &AppHandle) {
    let Some(yes) = dom::html_element(document, ID_YES) else {
        log::warn!("[init] missing #{}", ID_YES);
        return;
    };

    let h = handle.clone();
    dom::add_listener(&yes, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        let now = h.now();
        let mut host = h.host.borrow_mut();
        let at = h
            .app
            .borrow_mut()
            .accept(dom::viewport_size(), &mut *host, now);
        log::info!("[scene] yes! petals at ({:.0},{:.0})", at.x, at.y);
    });

    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let el = yes.clone();
        dom::add_listener(&yes, event, move |_: web::MouseEvent| {
            render::set_hover_scale(&el, hovered);
        });
    }
}

fn wire_no_button(document: &web::Document, handle: &AppHandle) {
    let Some(no) = dom::html_element(document, ID_NO) else {
        log::warn!("[init] missing #{}", ID_NO);
        return;
    };
    // Hovering counts as an attempt too, so it can never be caught.
    for event in ["mouseenter", "click"] {
        let h = handle.clone();
        let button = no.clone();
        dom::add_listener(&no, event, move |ev: web::MouseEvent| {
            ev.stop_propagation();
            let Some(area) = measure_no_area(&button) else {
                return;
            };
            let mut app = h.app.borrow_mut();
            let activation = app.dodge(&area);
            render::apply_activation(&button, activation, app.no_button().hint());
        });
    }
}

fn measure_no_area(button: &web::HtmlElement) -> Option<Area> {
    let parent = button.parent_element()?;
    Some(Area::new(
        parent.client_width() as f32,
        parent.client_height() as f32,
        button.client_width() as f32,
        button.client_height() as f32,
    ))
}

fn wire_photo(document: &web::Document, handle: &AppHandle) {
    let h = handle.clone();
    dom::add_element_listener(document, ID_PHOTO, "click", move |ev: web::MouseEvent| {
        // the polaroid is a control of its own, not a "next" gesture
        ev.stop_propagation();
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let now = h.now();
        h.app.borrow_mut().photo_click(at, now);
    });
}
