use thiserror::Error;

/// Why a startup fragment did not select a scene. Always recovered by staying
/// on the landing scene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FragmentError {
    #[error("no scene marker in fragment {0:?}")]
    Missing(String),
    #[error("scene marker not followed by a digit in {0:?}")]
    NotADigit(String),
    #[error("scene {0} is out of range")]
    OutOfRange(u32),
}

/// Failures reported by the rendering host. Navigation treats all of them as
/// best-effort and only logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("scroll target for scene {0} is not mounted")]
    MissingScrollTarget(usize),
    #[error("history update failed: {0}")]
    History(String),
}
