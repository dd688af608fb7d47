//! The "No" control that runs away from the pointer.
//!
//! State is explicit ([`EvasionState`]) and the next position is a pure
//! function of that state, the layout ([`Area`]) and an RNG, so the whole
//! behaviour can be driven without a live page.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Layout of the control and the wrapper it moves within, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub container: Vec2,
    pub control: Vec2,
}

impl Area {
    pub fn new(container_w: f32, container_h: f32, control_w: f32, control_h: f32) -> Self {
        Self {
            container: Vec2::new(container_w, container_h),
            control: Vec2::new(control_w, control_h),
        }
    }

    /// Range of valid top-left offsets, or `None` before layout has happened.
    pub fn usable(&self, inset: f32) -> Option<Vec2> {
        let usable = self.container - self.control - Vec2::splat(inset);
        (usable.is_finite() && usable.x > 0.0 && usable.y > 0.0).then_some(usable)
    }
}

/// Tuning for the evasion behaviour.
#[derive(Clone, Debug)]
pub struct EvasionParams {
    pub final_attempt: u32,
    pub min_distance: f32,
    pub max_tries: u32,
    pub edge_inset: f32,
    pub base_transition_sec: f32,
    pub transition_decay: f32,
    pub min_transition_sec: f32,
    pub tuck_transition_sec: f32,
    /// Gap kept between the tucked control and the wrapper's right edge.
    pub tuck_right_margin: f32,
    pub tuck_min_left: f32,
    pub tuck_top: f32,
    pub initial_hint: &'static str,
    pub hints: &'static [&'static str],
    pub final_hint: &'static str,
}

impl Default for EvasionParams {
    fn default() -> Self {
        Self {
            final_attempt: EVADE_FINAL_ATTEMPT,
            min_distance: EVADE_MIN_DISTANCE_PX,
            max_tries: EVADE_MAX_TRIES,
            edge_inset: EVADE_EDGE_INSET_PX,
            base_transition_sec: EVADE_BASE_TRANSITION_SEC,
            transition_decay: EVADE_TRANSITION_DECAY,
            min_transition_sec: EVADE_MIN_TRANSITION_SEC,
            tuck_transition_sec: EVADE_TUCK_TRANSITION_SEC,
            tuck_right_margin: EVADE_TUCK_RIGHT_MARGIN_PX,
            tuck_min_left: EVADE_TUCK_MIN_LEFT_PX,
            tuck_top: EVADE_TUCK_TOP_PX,
            initial_hint: NO_INITIAL_HINT,
            hints: NO_ESCALATING_HINTS,
            final_hint: NO_FINAL_HINT,
        }
    }
}

/// Per-control evasion bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvasionState {
    pub attempt_count: u32,
    pub last_position: Option<Vec2>,
    pub is_final: bool,
}

/// Outcome of one activation, for the renderer to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activation {
    Relocated { position: Vec2, transition_sec: f32 },
    /// Reached the final attempt; parked in the corner for good.
    Tucked { position: Vec2, transition_sec: f32 },
    /// Layout not measurable yet; only the hint moved on.
    Skipped,
    /// Already final; nothing to do.
    Unchanged,
}

/// Pick a random offset in `[0, usable)` at least `min_distance` away from
/// `last`. After `max_tries` misses the farthest candidate seen wins.
pub fn relocate<R: Rng + ?Sized>(
    last: Option<Vec2>,
    usable: Vec2,
    params: &EvasionParams,
    rng: &mut R,
) -> Vec2 {
    let mut best = Vec2::ZERO;
    let mut best_dist = f32::NEG_INFINITY;
    for _ in 0..params.max_tries.max(1) {
        let candidate = Vec2::new(rng.gen::<f32>() * usable.x, rng.gen::<f32>() * usable.y);
        let dist = match last {
            Some(prev) => candidate.distance(prev),
            None => return candidate,
        };
        if dist >= params.min_distance {
            return candidate;
        }
        if dist > best_dist {
            best = candidate;
            best_dist = dist;
        }
    }
    best
}

/// Corner the control settles into once it gives up: top edge, near the right.
pub fn tucked_position(area: &Area, params: &EvasionParams) -> Vec2 {
    let left =
        (area.container.x - area.control.x - params.tuck_right_margin).max(params.tuck_min_left);
    Vec2::new(left, params.tuck_top)
}

/// Relocation animation length for a 1-based attempt; shrinks geometrically.
pub fn transition_secs(attempt: u32, params: &EvasionParams) -> f32 {
    let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
    (params.base_transition_sec * params.transition_decay.powi(exp)).max(params.min_transition_sec)
}

/// Escalating hint for a 1-based attempt, sticking on the last message.
pub fn hint_for_attempt(attempt: u32, params: &EvasionParams) -> &'static str {
    if attempt == 0 {
        return params.initial_hint;
    }
    if attempt >= params.final_attempt {
        return params.final_hint;
    }
    let idx = (attempt as usize - 1).min(params.hints.len().saturating_sub(1));
    params.hints.get(idx).copied().unwrap_or(params.final_hint)
}

#[derive(Clone, Debug)]
pub struct EvasiveControl {
    state: EvasionState,
    params: EvasionParams,
    hint: &'static str,
    position: Option<Vec2>,
    transition_sec: f32,
}

impl Default for EvasiveControl {
    fn default() -> Self {
        Self::with_params(EvasionParams::default())
    }
}

impl EvasiveControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: EvasionParams) -> Self {
        Self {
            state: EvasionState::default(),
            hint: params.initial_hint,
            transition_sec: params.base_transition_sec,
            position: None,
            params,
        }
    }

    pub fn state(&self) -> &EvasionState {
        &self.state
    }

    pub fn hint(&self) -> &'static str {
        self.hint
    }

    /// Current offset inside the wrapper; `None` until it first moves.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn transition_sec(&self) -> f32 {
        self.transition_sec
    }

    pub fn is_final(&self) -> bool {
        self.state.is_final
    }

    /// Handle a pointer-enter or click on the control.
    pub fn activate<R: Rng + ?Sized>(&mut self, area: &Area, rng: &mut R) -> Activation {
        self.state.attempt_count = self.state.attempt_count.saturating_add(1);
        let attempt = self.state.attempt_count;

        if self.state.is_final {
            return Activation::Unchanged;
        }

        if attempt >= self.params.final_attempt {
            let position = tucked_position(area, &self.params);
            self.state.is_final = true;
            self.hint = self.params.final_hint;
            self.position = Some(position);
            self.transition_sec = self.params.tuck_transition_sec;
            log::info!("[no] giving up after {} attempts", attempt);
            return Activation::Tucked {
                position,
                transition_sec: self.transition_sec,
            };
        }

        self.hint = hint_for_attempt(attempt, &self.params);
        let Some(usable) = area.usable(self.params.edge_inset) else {
            log::debug!("[no] layout not ready, attempt {} not relocated", attempt);
            return Activation::Skipped;
        };
        let position = relocate(self.state.last_position, usable, &self.params, rng);
        self.state.last_position = Some(position);
        self.position = Some(position);
        self.transition_sec = transition_secs(attempt, &self.params);
        log::debug!(
            "[no] attempt {} -> ({:.0},{:.0}) in {:.2}s",
            attempt,
            position.x,
            position.y,
            self.transition_sec
        );
        Activation::Relocated {
            position,
            transition_sec: self.transition_sec,
        }
    }
}
