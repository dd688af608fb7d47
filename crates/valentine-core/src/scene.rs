//! Scene identities and the small bits of input vocabulary that map onto them.
//!
//! A [`Scene`] is always one of the five narrative steps; numeric requests are
//! clamped into range rather than rejected. Fragments (`#scene-<digit>`) and
//! navigation keys are parsed here so the sequencer only ever sees typed values.

use crate::constants::{FRAGMENT_PREFIX, LAST_SCENE_INDEX};
use crate::error::FragmentError;

/// One full-screen step of the greeting, in narrative order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scene {
    #[default]
    Landing,
    Letter,
    Question,
    Memory,
    Celebration,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Landing,
        Scene::Letter,
        Scene::Question,
        Scene::Memory,
        Scene::Celebration,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map any requested index onto a valid scene.
    #[inline]
    pub fn clamped(requested: i64) -> Scene {
        Scene::ALL[requested.clamp(0, LAST_SCENE_INDEX) as usize]
    }

    #[inline]
    pub fn first() -> Scene {
        Scene::Landing
    }

    #[inline]
    pub fn last() -> Scene {
        Scene::Celebration
    }

    pub fn next(self) -> Scene {
        Scene::clamped(self.index() as i64 + 1)
    }

    pub fn prev(self) -> Scene {
        Scene::clamped(self.index() as i64 - 1)
    }

    /// Fragment text without the leading `#`, e.g. `scene-2`.
    pub fn fragment(self) -> String {
        format!("{}{}", FRAGMENT_PREFIX, self.index())
    }

    pub fn name(self) -> &'static str {
        match self {
            Scene::Landing => "landing",
            Scene::Letter => "letter",
            Scene::Question => "question",
            Scene::Memory => "memory",
            Scene::Celebration => "celebration",
        }
    }
}

/// Parse a URL fragment of the form `scene-<digit>`.
///
/// The leading `#` is optional and the marker may appear anywhere in the
/// fragment; only a single digit in `0..=4` is accepted.
pub fn parse_fragment(fragment: &str) -> Result<Scene, FragmentError> {
    let pos = fragment
        .find(FRAGMENT_PREFIX)
        .ok_or_else(|| FragmentError::Missing(fragment.to_string()))?;
    let digit = fragment[pos + FRAGMENT_PREFIX.len()..]
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| FragmentError::NotADigit(fragment.to_string()))?;
    if i64::from(digit) > LAST_SCENE_INDEX {
        return Err(FragmentError::OutOfRange(digit));
    }
    Ok(Scene::clamped(i64::from(digit)))
}

/// Keys that drive scene navigation. Anything else is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
    First,
    Last,
}

impl NavKey {
    #[inline]
    pub fn from_key(key: &str) -> Option<NavKey> {
        match key {
            "ArrowDown" | "PageDown" => Some(NavKey::Next),
            "ArrowUp" | "PageUp" => Some(NavKey::Prev),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }

    pub fn target(self, current: Scene) -> Scene {
        match self {
            NavKey::Next => current.next(),
            NavKey::Prev => current.prev(),
            NavKey::First => Scene::first(),
            NavKey::Last => Scene::last(),
        }
    }
}

/// Where a click on the scenes container landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Plain scene background; acts as "next".
    Background,
    /// A button, link, card region or the evasive control.
    Interactive,
}

impl ClickTarget {
    /// Classify a click from the tag name of its target and whether it sits
    /// inside a card or the evasive control.
    pub fn classify(tag_name: &str, inside_card: bool, inside_evasive: bool) -> ClickTarget {
        let tag = tag_name.to_ascii_lowercase();
        if tag == "button" || tag == "a" || inside_card || inside_evasive {
            ClickTarget::Interactive
        } else {
            ClickTarget::Background
        }
    }
}

