use valentine_core::{HostError, Scene, SceneHost};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Page side of scene navigation: scrolls section elements and rewrites the
/// URL fragment in place.
pub struct DomHost {
    window: web::Window,
    sections: Vec<web::Element>,
    smooth: bool,
}

impl DomHost {
    pub fn new(window: web::Window, sections: Vec<web::Element>, smooth: bool) -> Self {
        if !smooth {
            log::info!("[scene] smooth scrolling unavailable, jumping instead");
        }
        Self {
            window,
            sections,
            smooth,
        }
    }

    pub fn sections(&self) -> &[web::Element] {
        &self.sections
    }
}

impl SceneHost for DomHost {
    fn scroll_to(&mut self, scene: Scene) -> Result<(), HostError> {
        let el = self
            .sections
            .get(scene.index())
            .filter(|el| el.is_connected())
            .ok_or(HostError::MissingScrollTarget(scene.index()))?;
        if self.smooth {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        } else {
            el.scroll_into_view_with_bool(true);
        }
        Ok(())
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), HostError> {
        let history = self
            .window
            .history()
            .map_err(|e| HostError::History(format!("{:?}", e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", fragment)))
            .map_err(|e| HostError::History(format!("{:?}", e)))
    }
}
