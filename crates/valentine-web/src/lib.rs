#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::Valentine;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod dom;
mod events;
mod frame;
mod host;
mod markup;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount point supplied by the page shell; falls back to `<body>`.
fn mount_point(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id("app") {
        return Ok(el);
    }
    document
        .body()
        .map(|b| b.unchecked_into::<web::Element>())
        .ok_or_else(|| anyhow::anyhow!("no #app and no <body>"))
}

fn build_root(document: &web::Document) -> anyhow::Result<(web::Element, Vec<web::Element>)> {
    let root = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    root.set_id(markup::ID_ROOT);
    root.set_inner_html(&markup::app_html());
    mount_point(document)?
        .append_child(&root)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let list = root
        .query_selector_all(markup::SCENE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let sections: Vec<web::Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if sections.len() != valentine_core::constants::SCENE_COUNT {
        log::warn!(
            "[init] expected {} scenes, found {}",
            valentine_core::constants::SCENE_COUNT,
            sections.len()
        );
    }
    Ok((root, sections))
}

/// A missing photograph leaves the browser's broken-image placeholder; tag the
/// polaroid so the stylesheet can soften it.
async fn check_photo(document: web::Document) {
    let Some(img) = document
        .query_selector(&format!("#{} img", markup::ID_PHOTO))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        return;
    };
    if let Err(e) = JsFuture::from(img.decode()).await {
        log::warn!("[init] photo {} unavailable: {:?}", img.src(), e);
        if let Some(polaroid) = document.get_element_by_id(markup::ID_PHOTO) {
            _ = polaroid.class_list().add_1("missing");
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (root, sections) = build_root(&document)?;
    let smooth = dom::supports_smooth_scroll(&document);
    let host = host::DomHost::new(window.clone(), sections, smooth);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let handle = frame::AppHandle {
        app: Rc::new(RefCell::new(Valentine::new(seed))),
        host: Rc::new(RefCell::new(host)),
        epoch: Instant::now(),
    };

    let fragment = window.location().hash().unwrap_or_default();
    handle.app.borrow_mut().init(&fragment, handle.now());

    events::wire_all(&document, &handle);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        handle: handle.clone(),
        root: root.clone(),
        particles: render::ParticleLayer::new(document.clone(), root),
    }));
    frame::start_loop(frame_ctx);

    check_photo(document).await;
    Ok(())
}
