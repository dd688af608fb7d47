//! Short-lived decorative particles (hearts and petals).
//!
//! Particles live in a generation-counted arena. Each one gets a fixed expiry
//! when it is created, and [`ParticleField::sweep`] drops everything that is
//! due. Removal never depends on an animation finishing. The renderer mirrors
//! the arena: it creates a node for every spawned id and removes the node for
//! every swept id.

use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Heart,
    Petal,
}

/// Which animation family the particle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Short cluster around a point.
    Burst,
    /// Full-screen fall from the top edge.
    Fall,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub motion: Motion,
    /// Viewport position in CSS pixels.
    pub position: Vec2,
    pub size_px: Option<f32>,
    pub color: Option<&'static str>,
    pub opacity: Option<f32>,
    /// Animation length; `None` leaves it to the stylesheet.
    pub duration: Option<Duration>,
    pub created: Duration,
    pub expires: Duration,
}

/// Stable handle into a [`ParticleField`]. Stale handles never alias a newer
/// particle that reused the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId {
    pub index: u32,
    pub generation: u32,
}

/// Parameters for a clustered burst.
#[derive(Clone, Debug)]
pub struct BurstParams {
    pub kind: ParticleKind,
    pub count: usize,
    /// Half-extent of the random offset on each axis.
    pub spread: Vec2,
    pub duration_sec: [f32; 2],
    pub lifetime: Duration,
    pub palette: Option<&'static [&'static str]>,
}

impl BurstParams {
    pub fn hearts() -> Self {
        Self {
            kind: ParticleKind::Heart,
            count: HEART_BURST_COUNT,
            spread: Vec2::from(HEART_BURST_SPREAD),
            duration_sec: HEART_BURST_DURATION_SEC,
            lifetime: HEART_BURST_LIFETIME,
            palette: None,
        }
    }

    pub fn petals() -> Self {
        Self {
            kind: ParticleKind::Petal,
            count: PETAL_BURST_COUNT,
            spread: Vec2::from(PETAL_BURST_SPREAD),
            duration_sec: PETAL_BURST_DURATION_SEC,
            lifetime: PETAL_BURST_LIFETIME,
            palette: Some(&PETAL_PALETTE),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Parameters for the full-screen celebration shower.
#[derive(Clone, Debug)]
pub struct ShowerParams {
    pub petal_count: usize,
    pub heart_count: usize,
    pub petal_size_px: [f32; 2],
    pub petal_duration_sec: [f32; 2],
    pub petal_opacity: [f32; 2],
    pub petal_linger: Duration,
    pub heart_lifetime_sec: [f32; 2],
    pub palette: &'static [&'static str],
}

impl Default for ShowerParams {
    fn default() -> Self {
        Self {
            petal_count: SHOWER_PETAL_COUNT,
            heart_count: SHOWER_HEART_COUNT,
            petal_size_px: SHOWER_PETAL_SIZE_PX,
            petal_duration_sec: SHOWER_PETAL_DURATION_SEC,
            petal_opacity: SHOWER_PETAL_OPACITY,
            petal_linger: SHOWER_PETAL_LINGER,
            heart_lifetime_sec: SHOWER_HEART_LIFETIME_SEC,
            palette: &PETAL_PALETTE,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    particle: Option<Particle>,
}

pub type SweptIds = SmallVec<[ParticleId; 32]>;

#[derive(Debug)]
pub struct ParticleField {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.particle.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.particle.as_ref().map(|p| {
                (
                    ParticleId {
                        index: i as u32,
                        generation: s.generation,
                    },
                    p,
                )
            })
        })
    }

    pub fn insert(&mut self, particle: Particle) -> ParticleId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.particle = Some(particle);
            return ParticleId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            particle: Some(particle),
        });
        ParticleId {
            index,
            generation: 0,
        }
    }

    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let particle = slot.particle.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(particle)
    }

    /// Remove every particle whose expiry is at or before `now`.
    pub fn sweep(&mut self, now: Duration) -> SweptIds {
        let due: SweptIds = self
            .iter()
            .filter(|(_, p)| p.expires <= now)
            .map(|(id, _)| id)
            .collect();
        for id in &due {
            self.remove(*id);
        }
        if !due.is_empty() {
            log::debug!("[fx] swept {} particles, {} live", due.len(), self.live);
        }
        due
    }

    /// Spawn a cluster of `params.count` particles around `at`.
    pub fn burst(&mut self, params: &BurstParams, at: Vec2, now: Duration) -> Vec<ParticleId> {
        let mut ids = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let offset = Vec2::new(
                self.rng.gen_range(-1.0_f32..=1.0) * params.spread.x,
                self.rng.gen_range(-1.0_f32..=1.0) * params.spread.y,
            );
            let color = params
                .palette
                .and_then(|pal| pal.choose(&mut self.rng).copied());
            let duration = random_secs(&mut self.rng, params.duration_sec);
            ids.push(self.insert(Particle {
                kind: params.kind,
                motion: Motion::Burst,
                position: at + offset,
                size_px: None,
                color,
                opacity: None,
                duration: Some(duration),
                created: now,
                expires: now + params.lifetime,
            }));
        }
        log::debug!("[fx] {:?} burst x{} at ({:.0},{:.0})", params.kind, params.count, at.x, at.y);
        ids
    }

    /// Full-width celebration: falling petals plus a few drifting hearts.
    pub fn shower(
        &mut self,
        params: &ShowerParams,
        viewport_width: f32,
        now: Duration,
    ) -> Vec<ParticleId> {
        let width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        let mut ids = Vec::with_capacity(params.petal_count + params.heart_count);
        for _ in 0..params.petal_count {
            let duration = random_secs(&mut self.rng, params.petal_duration_sec);
            let size = random_in(&mut self.rng, params.petal_size_px);
            let opacity = random_in(&mut self.rng, params.petal_opacity);
            let color = params.palette.choose(&mut self.rng).copied();
            let x = self.rng.gen::<f32>() * width;
            ids.push(self.insert(Particle {
                kind: ParticleKind::Petal,
                motion: Motion::Fall,
                position: Vec2::new(x, 0.0),
                size_px: Some(size),
                color,
                opacity: Some(opacity),
                duration: Some(duration),
                created: now,
                expires: now + duration + params.petal_linger,
            }));
        }
        for _ in 0..params.heart_count {
            let x = self.rng.gen::<f32>() * width;
            let lifetime = random_secs(&mut self.rng, params.heart_lifetime_sec);
            ids.push(self.insert(Particle {
                kind: ParticleKind::Heart,
                motion: Motion::Fall,
                position: Vec2::new(x, 0.0),
                size_px: None,
                color: None,
                opacity: None,
                duration: None,
                created: now,
                expires: now + lifetime,
            }));
        }
        log::info!("[fx] shower: {} petals, {} hearts", params.petal_count, params.heart_count);
        ids
    }
}

#[inline]
fn random_in<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    if range[1] > range[0] {
        rng.gen_range(range[0]..range[1])
    } else {
        range[0]
    }
}

#[inline]
fn random_secs<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> Duration {
    Duration::from_secs_f32(random_in(rng, range).max(0.0))
}
