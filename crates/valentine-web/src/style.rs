// Inline style and class strings for rendered state. Kept free of web-sys so
// host-side tests can include it directly.

use glam::Vec2;
use valentine_core::{Motion, Particle, ParticleKind, Scene};

#[inline]
pub fn particle_class(kind: ParticleKind, motion: Motion) -> &'static str {
    match (kind, motion) {
        (ParticleKind::Heart, Motion::Burst) => "burst-heart",
        (ParticleKind::Heart, Motion::Fall) => "drop-heart",
        (ParticleKind::Petal, _) => "petal",
    }
}

/// Inline style for a particle node. Falling particles only pin their
/// horizontal start; the stylesheet animates them down from the top edge.
pub fn particle_style(p: &Particle) -> String {
    let mut css = format!("left:{:.1}px;", p.position.x);
    if p.motion == Motion::Burst {
        css.push_str(&format!("top:{:.1}px;", p.position.y));
    }
    if let Some(d) = p.duration {
        match p.kind {
            // heart keyframes read their length from a custom property
            ParticleKind::Heart => css.push_str(&format!("--d:{:.2}s;", d.as_secs_f32())),
            ParticleKind::Petal => {
                css.push_str(&format!("animation-duration:{:.2}s;", d.as_secs_f32()))
            }
        }
    }
    if let Some(size) = p.size_px {
        css.push_str(&format!("font-size:{:.1}px;", size));
    }
    if let Some(color) = p.color {
        css.push_str(&format!("background:{};", color));
    }
    if let Some(opacity) = p.opacity {
        css.push_str(&format!("opacity:{:.2};", opacity));
    }
    css
}

#[inline]
pub fn root_class(scene: Scene) -> String {
    format!("valentine-app scene-{}", scene.index())
}

#[inline]
pub fn scene_class(active: bool) -> &'static str {
    if active {
        "scene active"
    } else {
        "scene"
    }
}

pub fn relocation_transition(secs: f32) -> String {
    format!("left {secs:.3}s ease, top {secs:.3}s ease, transform .12s")
}

pub fn tuck_transition(secs: f32) -> String {
    format!("all {:.0}ms ease", secs * 1000.0)
}

pub fn placed_style(position: Vec2, transition: &str) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;transition:{};",
        position.x, position.y, transition
    )
}

#[inline]
pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "scale(1.05)"
    } else {
        "scale(1)"
    }
}
