//! Scene sequencer: the single owner of "which scene is showing".
//!
//! Every change of the current scene goes through [`SceneSequencer`]. Side
//! effects on the page (scrolling, the URL fragment) are delegated to a
//! [`SceneHost`] and are best-effort: failures are logged and swallowed, the
//! index is updated regardless.
//!
//! Scroll-position feedback is debounced to one application per animation
//! frame: [`SceneSequencer::request_scroll_sync`] only records the latest
//! sample (cancelling any earlier pending one) and [`SceneSequencer::on_frame`]
//! applies it.

use crate::constants::{INIT_DELAY, LAST_SCENE_INDEX, SCROLL_SETTLE};
use crate::error::HostError;
use crate::scene::{parse_fragment, ClickTarget, NavKey, Scene};
use std::time::Duration;

/// Page-side effects the sequencer asks for when navigating.
pub trait SceneHost {
    /// Align the scene's container with the top of the viewport, animating if
    /// the platform supports it.
    fn scroll_to(&mut self, scene: Scene) -> Result<(), HostError>;

    /// Replace the URL fragment without pushing a history entry.
    fn replace_fragment(&mut self, fragment: &str) -> Result<(), HostError>;
}

/// A scroll position reading from the scenes container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Nearest scene for this reading, or `None` when the viewport has no
    /// usable height yet.
    pub fn nearest_scene(&self) -> Option<Scene> {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return None;
        }
        let ratio = (self.offset / self.viewport_height).round();
        if !ratio.is_finite() {
            return None;
        }
        Some(Scene::clamped(ratio.clamp(-1.0, LAST_SCENE_INDEX as f64 + 1.0) as i64))
    }
}

#[derive(Clone, Copy, Debug)]
struct Flight {
    target: Scene,
    deadline: Duration,
    /// Latest reading that disagreed with `target`; applied if the flight
    /// expires without ever arriving.
    deferred: Option<ScrollSample>,
}

#[derive(Debug, Default)]
pub struct SceneSequencer {
    current: Scene,
    pending_scroll: Option<ScrollSample>,
    pending_init: Option<(Scene, Duration)>,
    in_flight: Option<Flight>,
}

impl SceneSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Scene {
        self.current
    }

    /// True while a navigation-initiated scroll has not yet reached its target.
    #[inline]
    pub fn scroll_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Move to `requested` (clamped into range). Returns the scene navigated to.
    ///
    /// Calling this repeatedly with the same target leaves the same state.
    pub fn navigate_to<H: SceneHost + ?Sized>(
        &mut self,
        requested: i64,
        host: &mut H,
        now: Duration,
    ) -> Scene {
        let target = Scene::clamped(requested);
        match host.scroll_to(target) {
            Ok(()) => {
                self.in_flight = Some(Flight {
                    target,
                    deadline: now + SCROLL_SETTLE,
                    deferred: None,
                });
            }
            Err(e) => {
                log::debug!("[scene] scroll skipped: {}", e);
                self.in_flight = None;
            }
        }
        if self.current != target {
            log::info!("[scene] {} -> {}", self.current.name(), target.name());
        }
        self.current = target;
        // The scroll request above may have superseded whatever was queued.
        self.pending_scroll = None;
        self.write_fragment(host);
        target
    }

    /// Relative navigation, clamped at both ends.
    pub fn step<H: SceneHost + ?Sized>(
        &mut self,
        delta: i64,
        host: &mut H,
        now: Duration,
    ) -> Scene {
        let requested = self.current.index() as i64 + delta;
        self.navigate_to(requested, host, now)
    }

    /// Apply a navigation key. Returns true when the key was consumed.
    pub fn handle_key<H: SceneHost + ?Sized>(
        &mut self,
        key: &str,
        host: &mut H,
        now: Duration,
    ) -> bool {
        match NavKey::from_key(key) {
            Some(nav) => {
                let target = nav.target(self.current);
                self.navigate_to(target.index() as i64, host, now);
                true
            }
            None => false,
        }
    }

    /// A click on the scenes container advances unless it hit a real control.
    pub fn handle_click<H: SceneHost + ?Sized>(
        &mut self,
        target: ClickTarget,
        host: &mut H,
        now: Duration,
    ) -> bool {
        match target {
            ClickTarget::Background => {
                self.step(1, host, now);
                true
            }
            ClickTarget::Interactive => false,
        }
    }

    /// Record the latest scroll reading for the next frame. Returns true when a
    /// pending reading was replaced.
    pub fn request_scroll_sync(&mut self, offset: f64, viewport_height: f64) -> bool {
        self.pending_scroll
            .replace(ScrollSample {
                offset,
                viewport_height,
            })
            .is_some()
    }

    /// Adopt the scene nearest to the scroll position without scrolling.
    ///
    /// While a navigation-initiated scroll is in flight the reading is
    /// advisory: it only counts once it agrees with the flight's target.
    /// A disagreeing reading is held back and applied when the flight expires.
    /// Returns true when the current scene changed.
    pub fn sync_from_scroll(&mut self, offset: f64, viewport_height: f64) -> bool {
        let sample = ScrollSample {
            offset,
            viewport_height,
        };
        let Some(nearest) = sample.nearest_scene() else {
            return false;
        };
        if let Some(flight) = self.in_flight.as_mut() {
            if nearest == flight.target {
                self.in_flight = None;
            } else {
                flight.deferred = Some(sample);
            }
            return false;
        }
        if nearest == self.current {
            return false;
        }
        log::debug!(
            "[scene] scroll sync {} -> {}",
            self.current.name(),
            nearest.name()
        );
        self.current = nearest;
        true
    }

    /// Read the startup fragment and schedule the initial navigation.
    ///
    /// Anything but a valid `scene-<0..4>` marker leaves the landing scene
    /// showing.
    pub fn init_from_location(&mut self, fragment: &str, now: Duration) -> Option<Scene> {
        match parse_fragment(fragment) {
            Ok(scene) => {
                log::info!("[init] fragment selects {}", scene.name());
                self.pending_init = Some((scene, now + INIT_DELAY));
                Some(scene)
            }
            Err(e) => {
                if !fragment.trim_start_matches('#').is_empty() {
                    log::debug!("[init] ignoring fragment: {}", e);
                }
                None
            }
        }
    }

    /// Per-frame housekeeping: settle stale flights, fire the delayed initial
    /// navigation and apply at most one pending scroll reading. Returns true
    /// when the current scene changed.
    ///
    /// A flight that expires without reaching its target falls back to the
    /// last reading it held back.
    pub fn on_frame<H: SceneHost + ?Sized>(&mut self, host: &mut H, now: Duration) -> bool {
        let before = self.current;
        if let Some(flight) = self.in_flight {
            if now >= flight.deadline {
                self.in_flight = None;
                if let Some(sample) = flight.deferred {
                    if self.sync_from_scroll(sample.offset, sample.viewport_height) {
                        self.write_fragment(host);
                    }
                }
            }
        }
        if let Some((scene, due)) = self.pending_init {
            if now >= due {
                self.pending_init = None;
                self.navigate_to(scene.index() as i64, host, now);
            }
        }
        if let Some(sample) = self.pending_scroll.take() {
            if self.sync_from_scroll(sample.offset, sample.viewport_height) {
                self.write_fragment(host);
            }
        }
        self.current != before
    }

    fn write_fragment<H: SceneHost + ?Sized>(&self, host: &mut H) {
        if let Err(e) = host.replace_fragment(&self.current.fragment()) {
            log::debug!("[scene] fragment not updated: {}", e);
        }
    }
}
