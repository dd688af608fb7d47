// Host-side tests for the pure style and markup helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use glam::Vec2;
use std::time::Duration;
use style::*;
use valentine_core::{Motion, Particle, ParticleKind, Scene};

fn particle(kind: ParticleKind, motion: Motion) -> Particle {
    Particle {
        kind,
        motion,
        position: Vec2::new(120.0, 48.5),
        size_px: None,
        color: None,
        opacity: None,
        duration: Some(Duration::from_millis(1250)),
        created: Duration::ZERO,
        expires: Duration::from_secs(2),
    }
}

#[test]
fn particle_classes_match_stylesheet_names() {
    assert_eq!(particle_class(ParticleKind::Heart, Motion::Burst), "burst-heart");
    assert_eq!(particle_class(ParticleKind::Heart, Motion::Fall), "drop-heart");
    assert_eq!(particle_class(ParticleKind::Petal, Motion::Burst), "petal");
    assert_eq!(particle_class(ParticleKind::Petal, Motion::Fall), "petal");
}

#[test]
fn burst_heart_style_pins_point_and_custom_duration() {
    let css = particle_style(&particle(ParticleKind::Heart, Motion::Burst));
    assert_eq!(css, "left:120.0px;top:48.5px;--d:1.25s;");
}

#[test]
fn falling_petal_style_carries_look_but_no_top() {
    let mut p = particle(ParticleKind::Petal, Motion::Fall);
    p.size_px = Some(14.0);
    p.color = Some("#ff4d6d");
    p.opacity = Some(0.9);
    let css = particle_style(&p);
    assert!(!css.contains("top:"));
    assert!(css.contains("animation-duration:1.25s;"));
    assert!(css.contains("font-size:14.0px;"));
    assert!(css.contains("background:#ff4d6d;"));
    assert!(css.contains("opacity:0.90;"));
}

#[test]
fn drop_heart_without_duration_defers_to_stylesheet() {
    let mut p = particle(ParticleKind::Heart, Motion::Fall);
    p.duration = None;
    assert_eq!(particle_style(&p), "left:120.0px;");
}

#[test]
fn scene_classes_mirror_current_scene() {
    assert_eq!(root_class(Scene::Question), "valentine-app scene-2");
    assert_eq!(scene_class(true), "scene active");
    assert_eq!(scene_class(false), "scene");
}

#[test]
fn no_button_transitions() {
    assert_eq!(
        relocation_transition(0.42),
        "left 0.420s ease, top 0.420s ease, transform .12s"
    );
    assert_eq!(tuck_transition(0.24), "all 240ms ease");
    assert_eq!(
        placed_style(Vec2::new(10.0, 8.0), "all 240ms ease"),
        "position:absolute;left:10.0px;top:8.0px;transition:all 240ms ease;"
    );
    assert_eq!(hover_transform(true), "scale(1.05)");
    assert_eq!(hover_transform(false), "scale(1)");
}

#[test]
fn markup_has_every_scene_and_control() {
    let html = markup::app_html();
    assert_eq!(html.matches("<section class=\"scene\"").count(), 5);
    for scene in Scene::ALL {
        assert!(html.contains(&format!("data-scene=\"{}\"", scene.index())));
    }
    for id in [
        markup::ID_SCENES,
        markup::ID_OPEN,
        markup::ID_CONTINUE,
        markup::ID_YES,
        markup::ID_NO,
        markup::ID_PHOTO,
        markup::ID_REVEAL,
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(html.contains("src=\"/assets/us.jpeg\""));
    assert!(html.contains("No 😢"));
    assert_eq!(html.matches("class=\"h h").count(), 3);
}
