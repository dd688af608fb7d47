use crate::dom;
use crate::host::DomHost;
use crate::render::{self, ParticleLayer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use valentine_core::Valentine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State shared between DOM event closures and the animation-frame loop.
#[derive(Clone)]
pub struct AppHandle {
    pub app: Rc<RefCell<Valentine>>,
    pub host: Rc<RefCell<DomHost>>,
    pub epoch: Instant,
}

impl AppHandle {
    /// Time since start-up; the clock every core timer runs on.
    #[inline]
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

pub struct FrameContext {
    pub handle: AppHandle,
    pub root: web::Element,
    pub particles: ParticleLayer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.handle.now();
        let viewport = dom::viewport_size();
        let report = {
            let mut host = self.handle.host.borrow_mut();
            self.handle
                .app
                .borrow_mut()
                .on_frame(viewport, &mut *host, now)
        };
        if report.is_idle() {
            return;
        }

        let app = self.handle.app.borrow();
        if report.scene_changed {
            let host = self.handle.host.borrow();
            render::apply_scene(&self.root, host.sections(), app.scene());
        }
        self.particles.sync(app.particles(), &report);
        if !report.removed.is_empty() || !report.spawned.is_empty() {
            log::debug!(
                "[fx] +{} -{} nodes={}",
                report.spawned.len(),
                report.removed.len(),
                self.particles.len()
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
