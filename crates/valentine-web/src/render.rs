use crate::style;
use fnv::FnvHashMap;
use valentine_core::{Activation, FrameReport, ParticleField, ParticleId, Scene};
use web_sys as web;

/// Mirror the current scene into the root class and the per-section
/// `active` flag.
pub fn apply_scene(root: &web::Element, sections: &[web::Element], scene: Scene) {
    root.set_class_name(&style::root_class(scene));
    for (i, section) in sections.iter().enumerate() {
        section.set_class_name(style::scene_class(i == scene.index()));
    }
}

/// Apply an evasion outcome to the "No" button.
pub fn apply_activation(button: &web::HtmlElement, activation: Activation, hint: &str) {
    button.set_text_content(Some(hint));
    match activation {
        Activation::Relocated {
            position,
            transition_sec,
        } => {
            let transition = style::relocation_transition(transition_sec);
            _ = button.set_attribute("style", &style::placed_style(position, &transition));
        }
        Activation::Tucked {
            position,
            transition_sec,
        } => {
            let transition = style::tuck_transition(transition_sec);
            _ = button.set_attribute("style", &style::placed_style(position, &transition));
            _ = button.class_list().add_1("final");
        }
        Activation::Skipped | Activation::Unchanged => {}
    }
}

pub fn set_hover_scale(el: &web::HtmlElement, hovered: bool) {
    _ = el.style().set_property("transform", style::hover_transform(hovered));
}

/// DOM mirror of the particle arena. Nodes are created for spawned ids and
/// dropped for swept ids; nothing here reacts to animation events.
pub struct ParticleLayer {
    document: web::Document,
    container: web::Element,
    nodes: FnvHashMap<ParticleId, web::Element>,
}

impl ParticleLayer {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
            nodes: FnvHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn sync(&mut self, field: &ParticleField, report: &FrameReport) {
        for id in &report.spawned {
            let Some(p) = field.get(*id) else {
                continue;
            };
            let node = match self.document.create_element("div") {
                Ok(n) => n,
                Err(e) => {
                    log::warn!("[fx] create_element failed: {:?}", e);
                    continue;
                }
            };
            node.set_class_name(style::particle_class(p.kind, p.motion));
            _ = node.set_attribute("style", &style::particle_style(p));
            _ = node.set_attribute("aria-hidden", "true");
            if self.container.append_child(&node).is_ok() {
                self.nodes.insert(*id, node);
            }
        }
        for id in &report.removed {
            if let Some(node) = self.nodes.remove(id) {
                node.remove();
            }
        }
    }
}
