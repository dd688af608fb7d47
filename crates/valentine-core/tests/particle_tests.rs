// Host-side tests for the particle arena and its effects.

use glam::Vec2;
use std::time::Duration;
use valentine_core::constants::*;
use valentine_core::{BurstParams, Motion, Particle, ParticleField, ParticleKind, ShowerParams};

fn secs(v: f32) -> Duration {
    Duration::from_secs_f32(v)
}

fn dummy(expires: Duration) -> Particle {
    Particle {
        kind: ParticleKind::Heart,
        motion: Motion::Burst,
        position: Vec2::ZERO,
        size_px: None,
        color: None,
        opacity: None,
        duration: None,
        created: Duration::ZERO,
        expires,
    }
}

#[test]
fn heart_burst_clusters_around_the_pointer() {
    let mut field = ParticleField::new(1);
    let at = Vec2::new(300.0, 200.0);
    let ids = field.burst(&BurstParams::hearts(), at, secs(1.0));
    assert_eq!(ids.len(), HEART_BURST_COUNT);
    for id in ids {
        let p = field.get(id).unwrap();
        assert_eq!(p.kind, ParticleKind::Heart);
        assert!((p.position.x - at.x).abs() <= 60.0);
        assert!((p.position.y - at.y).abs() <= 20.0);
        let d = p.duration.unwrap().as_secs_f32();
        assert!((0.6..=1.8).contains(&d), "duration {d}");
        assert_eq!(p.expires, secs(1.0) + HEART_BURST_LIFETIME);
        assert_eq!(p.color, None);
    }
}

#[test]
fn petal_burst_uses_wider_spread_and_palette() {
    let mut field = ParticleField::new(2);
    let at = Vec2::new(500.0, 300.0);
    let ids = field.burst(&BurstParams::petals(), at, Duration::ZERO);
    assert_eq!(ids.len(), PETAL_BURST_COUNT);
    for id in ids {
        let p = field.get(id).unwrap();
        assert_eq!(p.kind, ParticleKind::Petal);
        assert!((p.position.x - at.x).abs() <= 80.0);
        assert!((p.position.y - at.y).abs() <= 40.0);
        let d = p.duration.unwrap().as_secs_f32();
        assert!((1.6..=3.8).contains(&d), "duration {d}");
        assert!(PETAL_PALETTE.contains(&p.color.unwrap()));
        assert_eq!(p.expires, PETAL_BURST_LIFETIME);
    }
}

#[test]
fn burst_count_is_configurable() {
    let mut field = ParticleField::new(3);
    let ids = field.burst(&BurstParams::hearts().with_count(5), Vec2::ZERO, Duration::ZERO);
    assert_eq!(ids.len(), 5);
    assert_eq!(field.len(), 5);
}

#[test]
fn shower_fills_the_width_with_petals_and_hearts() {
    let mut field = ParticleField::new(4);
    let now = secs(10.0);
    let ids = field.shower(&ShowerParams::default(), 1280.0, now);
    assert_eq!(ids.len(), SHOWER_PETAL_COUNT + SHOWER_HEART_COUNT);

    let petals: Vec<_> = field.iter().filter(|(_, p)| p.kind == ParticleKind::Petal).collect();
    let hearts: Vec<_> = field.iter().filter(|(_, p)| p.kind == ParticleKind::Heart).collect();
    assert_eq!(petals.len(), 80);
    assert_eq!(hearts.len(), 16);

    for (_, p) in &petals {
        assert_eq!(p.motion, Motion::Fall);
        assert!(p.position.x >= 0.0 && p.position.x < 1280.0);
        let size = p.size_px.unwrap();
        assert!((12.0..=26.0).contains(&size));
        let d = p.duration.unwrap();
        assert!(d >= secs(4.0) && d <= secs(8.0));
        assert_eq!(p.expires, now + d + SHOWER_PETAL_LINGER);
        assert!(PETAL_PALETTE.contains(&p.color.unwrap()));
        let o = p.opacity.unwrap();
        assert!((0.8..=1.0).contains(&o));
    }
    for (_, h) in &hearts {
        let life = h.expires - now;
        assert!(life >= secs(5.0) && life <= secs(8.0), "heart lifetime {life:?}");
    }
}

#[test]
fn nothing_outlives_its_deadline() {
    let mut field = ParticleField::new(5);
    field.burst(&BurstParams::hearts(), Vec2::new(10.0, 10.0), Duration::ZERO);
    field.burst(&BurstParams::petals(), Vec2::new(10.0, 10.0), Duration::ZERO);
    field.shower(&ShowerParams::default(), 800.0, Duration::ZERO);
    assert_eq!(field.len(), 20 + 18 + 96);

    let swept = field.sweep(HEART_BURST_LIFETIME);
    assert_eq!(swept.len(), 20);
    assert!(field.iter().all(|(_, p)| p.kind != ParticleKind::Heart || p.motion == Motion::Fall));

    let swept = field.sweep(PETAL_BURST_LIFETIME);
    assert_eq!(swept.len(), 18);

    // longest possible shower petal: 8s fall + 1.2s linger
    field.sweep(secs(8.0) + SHOWER_PETAL_LINGER);
    assert!(field.is_empty());
    assert!(field.sweep(secs(60.0)).is_empty());
}

#[test]
fn sweep_keeps_particles_that_are_not_due() {
    let mut field = ParticleField::new(6);
    field.burst(&BurstParams::hearts(), Vec2::ZERO, secs(1.0));
    assert!(field.sweep(secs(2.9)).is_empty());
    assert_eq!(field.len(), 20);
    assert_eq!(field.sweep(secs(3.0)).len(), 20);
}

#[test]
fn stale_ids_do_not_alias_reused_slots() {
    let mut field = ParticleField::new(7);
    let old = field.insert(dummy(secs(1.0)));
    assert!(field.remove(old).is_some());
    let new = field.insert(dummy(secs(5.0)));
    assert_eq!(new.index, old.index);
    assert_ne!(new.generation, old.generation);
    assert!(field.get(old).is_none());
    assert!(field.remove(old).is_none());
    assert_eq!(field.get(new).unwrap().expires, secs(5.0));
    assert_eq!(field.len(), 1);
}

#[test]
fn slots_are_recycled_after_sweep() {
    let mut field = ParticleField::new(8);
    for round in 0..5u64 {
        let now = secs(round as f32 * 3.0);
        field.burst(&BurstParams::petals(), Vec2::ZERO, now);
        field.sweep(now + PETAL_BURST_LIFETIME);
        assert!(field.is_empty());
    }
    assert_eq!(field.iter().count(), 0);
    let id = field.insert(dummy(Duration::ZERO));
    assert!((id.index as usize) < PETAL_BURST_COUNT);
}
