pub mod app;
pub mod constants;
pub mod error;
pub mod evasive;
pub mod particles;
pub mod scene;
pub mod sequencer;

pub use app::*;
pub use error::*;
pub use evasive::{Activation, Area, EvasionParams, EvasionState, EvasiveControl};
pub use particles::*;
pub use scene::*;
pub use sequencer::*;
