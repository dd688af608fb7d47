//! Root composition of the greeting.
//!
//! [`Valentine`] owns every piece of mutable state (sequencer, the evasive
//! "No" control, the particle field and pending timers) and exposes one
//! method per user gesture. The web front-end forwards DOM events here and
//! renders whatever changed after [`Valentine::on_frame`].

use crate::constants::{ACCEPT_BURST_Y_OFFSET_PX, REVEAL_CELEBRATION_DELAY};
use crate::evasive::{Activation, Area, EvasionParams, EvasiveControl};
use crate::particles::{BurstParams, ParticleField, ParticleId, ShowerParams, SweptIds};
use crate::scene::{ClickTarget, Scene};
use crate::sequencer::{SceneHost, SceneSequencer};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Tunables for the whole composition.
#[derive(Clone, Debug)]
pub struct ValentineParams {
    pub evasion: EvasionParams,
    pub hearts: BurstParams,
    pub petals: BurstParams,
    pub shower: ShowerParams,
    pub celebration_delay: Duration,
}

impl Default for ValentineParams {
    fn default() -> Self {
        Self {
            evasion: EvasionParams::default(),
            hearts: BurstParams::hearts(),
            petals: BurstParams::petals(),
            shower: ShowerParams::default(),
            celebration_delay: REVEAL_CELEBRATION_DELAY,
        }
    }
}

/// What changed during a frame, for the renderer to mirror.
#[derive(Debug, Default)]
pub struct FrameReport {
    pub scene_changed: bool,
    pub spawned: Vec<ParticleId>,
    pub removed: SweptIds,
}

impl FrameReport {
    pub fn is_idle(&self) -> bool {
        !self.scene_changed && self.spawned.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug)]
pub struct Valentine {
    sequencer: SceneSequencer,
    no_button: EvasiveControl,
    particles: ParticleField,
    rng: StdRng,
    params: ValentineParams,
    pending_celebration: Option<Duration>,
    spawned: Vec<ParticleId>,
    scene_dirty: bool,
}

impl Valentine {
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, ValentineParams::default())
    }

    pub fn with_params(seed: u64, params: ValentineParams) -> Self {
        Self {
            sequencer: SceneSequencer::new(),
            no_button: EvasiveControl::with_params(params.evasion.clone()),
            particles: ParticleField::new(seed.wrapping_add(1)),
            rng: StdRng::seed_from_u64(seed),
            params,
            pending_celebration: None,
            spawned: Vec::new(),
            scene_dirty: true,
        }
    }

    #[inline]
    pub fn scene(&self) -> Scene {
        self.sequencer.current()
    }

    pub fn sequencer(&self) -> &SceneSequencer {
        &self.sequencer
    }

    pub fn no_button(&self) -> &EvasiveControl {
        &self.no_button
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn init(&mut self, fragment: &str, now: Duration) -> Option<Scene> {
        self.sequencer.init_from_location(fragment, now)
    }

    pub fn navigate_to<H: SceneHost + ?Sized>(
        &mut self,
        requested: i64,
        host: &mut H,
        now: Duration,
    ) -> Scene {
        let before = self.scene();
        let scene = self.sequencer.navigate_to(requested, host, now);
        self.scene_dirty |= scene != before;
        scene
    }

    /// Landing "Open it" button.
    pub fn open<H: SceneHost + ?Sized>(&mut self, host: &mut H, now: Duration) -> Scene {
        self.navigate_to(Scene::Letter.index() as i64, host, now)
    }

    /// Letter "Continue" button.
    pub fn continue_letter<H: SceneHost + ?Sized>(&mut self, host: &mut H, now: Duration) -> Scene {
        self.navigate_to(Scene::Question.index() as i64, host, now)
    }

    /// "Yes": petals just above the viewport centre, then on to the memory.
    pub fn accept<H: SceneHost + ?Sized>(
        &mut self,
        viewport: Vec2,
        host: &mut H,
        now: Duration,
    ) -> Vec2 {
        let at = Vec2::new(viewport.x / 2.0, viewport.y / 2.0 + ACCEPT_BURST_Y_OFFSET_PX);
        let ids = self.particles.burst(&self.params.petals, at, now);
        self.spawned.extend(ids);
        self.navigate_to(Scene::Memory.index() as i64, host, now);
        at
    }

    /// Pointer-enter or click on the "No" control.
    pub fn dodge(&mut self, area: &Area) -> Activation {
        self.no_button.activate(area, &mut self.rng)
    }

    /// Click on the polaroid: hearts at the pointer.
    pub fn photo_click(&mut self, at: Vec2, now: Duration) -> usize {
        let ids = self.particles.burst(&self.params.hearts, at, now);
        let n = ids.len();
        self.spawned.extend(ids);
        n
    }

    /// "Open the card": jump to the finale and celebrate shortly after.
    pub fn reveal<H: SceneHost + ?Sized>(&mut self, host: &mut H, now: Duration) -> Scene {
        let scene = self.navigate_to(Scene::Celebration.index() as i64, host, now);
        self.pending_celebration = Some(now + self.params.celebration_delay);
        scene
    }

    /// Petal and heart shower on the celebration scene.
    pub fn celebrate<H: SceneHost + ?Sized>(
        &mut self,
        viewport_width: f32,
        host: &mut H,
        now: Duration,
    ) -> usize {
        self.navigate_to(Scene::Celebration.index() as i64, host, now);
        let ids = self.particles.shower(&self.params.shower, viewport_width, now);
        let n = ids.len();
        self.spawned.extend(ids);
        n
    }

    pub fn key<H: SceneHost + ?Sized>(&mut self, key: &str, host: &mut H, now: Duration) -> bool {
        let before = self.scene();
        let handled = self.sequencer.handle_key(key, host, now);
        self.scene_dirty |= self.scene() != before;
        handled
    }

    pub fn click<H: SceneHost + ?Sized>(
        &mut self,
        target: ClickTarget,
        host: &mut H,
        now: Duration,
    ) -> bool {
        let before = self.scene();
        let advanced = self.sequencer.handle_click(target, host, now);
        self.scene_dirty |= self.scene() != before;
        advanced
    }

    pub fn scroll(&mut self, offset: f64, viewport_height: f64) {
        self.sequencer.request_scroll_sync(offset, viewport_height);
    }

    /// Advance timers, apply pending scroll readings and sweep expired
    /// particles.
    pub fn on_frame<H: SceneHost + ?Sized>(
        &mut self,
        viewport: Vec2,
        host: &mut H,
        now: Duration,
    ) -> FrameReport {
        let mut scene_changed = self.sequencer.on_frame(host, now);
        if let Some(due) = self.pending_celebration {
            if now >= due {
                self.pending_celebration = None;
                self.celebrate(viewport.x, host, now);
            }
        }
        scene_changed |= std::mem::take(&mut self.scene_dirty);
        let removed = if self.particles.is_empty() {
            SweptIds::new()
        } else {
            self.particles.sweep(now)
        };
        FrameReport {
            scene_changed,
            spawned: std::mem::take(&mut self.spawned),
            removed,
        }
    }
}
