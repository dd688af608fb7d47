// Shared fixtures for host-side tests.

#![allow(dead_code)]

use std::time::Duration;
use valentine_core::{HostError, Scene, SceneHost};

/// Host that records every request and can be told to fail.
#[derive(Default)]
pub struct RecordingHost {
    pub scrolls: Vec<Scene>,
    pub fragments: Vec<String>,
    pub missing_targets: bool,
    pub history_broken: bool,
}

impl SceneHost for RecordingHost {
    fn scroll_to(&mut self, scene: Scene) -> Result<(), HostError> {
        if self.missing_targets {
            return Err(HostError::MissingScrollTarget(scene.index()));
        }
        self.scrolls.push(scene);
        Ok(())
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), HostError> {
        if self.history_broken {
            return Err(HostError::History("SecurityError".into()));
        }
        self.fragments.push(fragment.to_string());
        Ok(())
    }
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}
