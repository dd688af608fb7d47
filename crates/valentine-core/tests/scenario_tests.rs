// End-to-end walks through the greeting using the root composition.

mod common;

use common::{ms, RecordingHost};
use glam::Vec2;
use valentine_core::constants::*;
use valentine_core::{Activation, Area, ClickTarget, ParticleKind, Scene, Valentine};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);

#[test]
fn fragment_on_load_selects_scene_after_delay() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(42);
    app.init("#scene-2", ms(0));
    app.on_frame(VIEWPORT, &mut host, ms(16));
    assert_eq!(app.scene(), Scene::Landing);
    let report = app.on_frame(VIEWPORT, &mut host, INIT_DELAY + ms(1));
    assert!(report.scene_changed);
    assert_eq!(app.scene(), Scene::Question);
    assert_eq!(host.fragments.last().map(String::as_str), Some("scene-2"));
}

#[test]
fn no_button_runs_twice_then_parks() {
    let mut app = Valentine::new(42);
    let area = Area::new(420.0, 260.0, 110.0, 44.0);
    let mut hints = Vec::new();
    let mut outcomes = Vec::new();
    for _ in 0..3 {
        outcomes.push(app.dodge(&area));
        hints.push(app.no_button().hint());
    }
    assert_eq!(hints, vec!["Are you sure?", "Think again", "Please click on yes ❤️"]);
    assert!(matches!(outcomes[0], Activation::Relocated { .. }));
    assert!(matches!(outcomes[1], Activation::Relocated { .. }));
    let tucked = Vec2::new(420.0 - 110.0 - 28.0, 8.0);
    assert_eq!(
        outcomes[2],
        Activation::Tucked {
            position: tucked,
            transition_sec: EVADE_TUCK_TRANSITION_SEC
        }
    );
    assert_eq!(app.dodge(&area), Activation::Unchanged);
    assert_eq!(app.no_button().position(), Some(tucked));
}

#[test]
fn accepting_moves_to_memory_with_petal_burst() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(42);
    app.navigate_to(2, &mut host, ms(0));
    let at = app.accept(VIEWPORT, &mut host, ms(100));
    assert_eq!(app.scene(), Scene::Memory);
    assert_eq!(at, Vec2::new(640.0, 320.0));

    let report = app.on_frame(VIEWPORT, &mut host, ms(116));
    assert_eq!(report.spawned.len(), PETAL_BURST_COUNT);
    for id in &report.spawned {
        let p = app.particles().get(*id).unwrap();
        assert_eq!(p.kind, ParticleKind::Petal);
        assert!((p.position - at).abs().cmple(Vec2::new(80.0, 40.0)).all());
    }
    let report = app.on_frame(VIEWPORT, &mut host, ms(100) + PETAL_BURST_LIFETIME);
    assert_eq!(report.removed.len(), PETAL_BURST_COUNT);
    assert!(app.particles().is_empty());
}

#[test]
fn reveal_celebrates_after_delay() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(42);
    app.navigate_to(3, &mut host, ms(0));
    app.reveal(&mut host, ms(1000));
    assert_eq!(app.scene(), Scene::Celebration);

    let report = app.on_frame(VIEWPORT, &mut host, ms(1200));
    assert!(report.spawned.is_empty());

    let report = app.on_frame(VIEWPORT, &mut host, ms(1000) + REVEAL_CELEBRATION_DELAY);
    assert_eq!(report.spawned.len(), SHOWER_PETAL_COUNT + SHOWER_HEART_COUNT);
    let report = app.on_frame(VIEWPORT, &mut host, ms(1600));
    assert!(report.spawned.is_empty(), "celebration fires once per reveal");
    let petals = app
        .particles()
        .iter()
        .filter(|(_, p)| p.kind == ParticleKind::Petal)
        .count();
    assert_eq!(petals, 80);
    assert_eq!(app.particles().len() - petals, 16);
    assert_eq!(app.scene(), Scene::Celebration);

    app.on_frame(VIEWPORT, &mut host, ms(20_000));
    assert!(app.particles().is_empty());
}

#[test]
fn photo_click_bursts_hearts_at_pointer() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(1);
    assert_eq!(app.photo_click(Vec2::new(200.0, 150.0), ms(0)), HEART_BURST_COUNT);
    let report = app.on_frame(VIEWPORT, &mut host, ms(16));
    assert_eq!(report.spawned.len(), 20);
    let report = app.on_frame(VIEWPORT, &mut host, HEART_BURST_LIFETIME);
    assert_eq!(report.removed.len(), 20);
}

#[test]
fn full_walk_through_by_buttons_keys_and_clicks() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(9);
    app.on_frame(VIEWPORT, &mut host, ms(0));

    app.open(&mut host, ms(10));
    assert_eq!(app.scene(), Scene::Letter);
    app.continue_letter(&mut host, ms(20));
    assert_eq!(app.scene(), Scene::Question);
    assert!(!app.click(ClickTarget::Interactive, &mut host, ms(30)));
    assert_eq!(app.scene(), Scene::Question);
    assert!(app.key("ArrowUp", &mut host, ms(40)));
    assert_eq!(app.scene(), Scene::Letter);
    assert!(app.click(ClickTarget::Background, &mut host, ms(50)));
    assert_eq!(app.scene(), Scene::Question);
    assert!(app.on_frame(VIEWPORT, &mut host, ms(60)).scene_changed);
    assert!(app.on_frame(VIEWPORT, &mut host, ms(70)).is_idle());
    assert!(app.key("End", &mut host, ms(80)));
    assert_eq!(app.scene(), Scene::Celebration);
    assert_eq!(host.fragments.last().map(String::as_str), Some("scene-4"));
}

#[test]
fn user_scroll_is_adopted_once_flight_settles() {
    let mut host = RecordingHost::default();
    let mut app = Valentine::new(3);
    app.open(&mut host, ms(0));
    app.scroll(1000.0, 800.0);
    app.on_frame(VIEWPORT, &mut host, ms(16));
    assert!(!app.sequencer().scroll_in_flight());
    app.scroll(2400.0, 800.0);
    let report = app.on_frame(VIEWPORT, &mut host, ms(32));
    assert!(report.scene_changed);
    assert_eq!(app.scene(), Scene::Memory);
}
