use std::time::Duration;

// Shared tuning constants for the greeting. Timings mirror the CSS animations
// shipped with the page shell; keep them in sync when the stylesheet changes.

// Scenes
pub const SCENE_COUNT: usize = 5;
pub const LAST_SCENE_INDEX: i64 = SCENE_COUNT as i64 - 1;
pub const FRAGMENT_PREFIX: &str = "scene-";

// Navigation timing
// Lets layout settle before the first scroll.
pub const INIT_DELAY: Duration = Duration::from_millis(60);
// Max lifetime of a programmatic scroll.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(1000);
pub const REVEAL_CELEBRATION_DELAY: Duration = Duration::from_millis(500);

// Evasive "No" control
pub const EVADE_FINAL_ATTEMPT: u32 = 3;
pub const EVADE_MIN_DISTANCE_PX: f32 = 60.0;
pub const EVADE_MAX_TRIES: u32 = 30;
pub const EVADE_EDGE_INSET_PX: f32 = 20.0; // keeps the control fully inside its wrapper
pub const EVADE_BASE_TRANSITION_SEC: f32 = 0.6;
pub const EVADE_TRANSITION_DECAY: f32 = 0.7; // each attempt runs at 70% of the previous duration
pub const EVADE_MIN_TRANSITION_SEC: f32 = 0.04;
pub const EVADE_TUCK_MIN_LEFT_PX: f32 = 8.0;
pub const EVADE_TUCK_RIGHT_MARGIN_PX: f32 = 28.0;
pub const EVADE_TUCK_TOP_PX: f32 = 8.0;
pub const EVADE_TUCK_TRANSITION_SEC: f32 = 0.24;

pub const NO_INITIAL_HINT: &str = "No 😢";
pub const NO_ESCALATING_HINTS: &[&str] = &["Are you sure?", "Think again"];
pub const NO_FINAL_HINT: &str = "Please click on yes ❤️";

// Particles
pub const PETAL_PALETTE: [&str; 4] = ["#ff7b9a", "#ffd6e0", "#fff0f5", "#ff4d6d"];

pub const HEART_BURST_COUNT: usize = 20;
pub const HEART_BURST_SPREAD: [f32; 2] = [60.0, 20.0]; // ± x, ± y
pub const HEART_BURST_DURATION_SEC: [f32; 2] = [0.6, 1.8];
pub const HEART_BURST_LIFETIME: Duration = Duration::from_millis(2000);

pub const PETAL_BURST_COUNT: usize = 18;
pub const PETAL_BURST_SPREAD: [f32; 2] = [80.0, 40.0];
pub const PETAL_BURST_DURATION_SEC: [f32; 2] = [1.6, 3.8];
pub const PETAL_BURST_LIFETIME: Duration = Duration::from_millis(2400);

pub const SHOWER_PETAL_COUNT: usize = 80;
pub const SHOWER_HEART_COUNT: usize = 16;
pub const SHOWER_PETAL_SIZE_PX: [f32; 2] = [12.0, 26.0];
pub const SHOWER_PETAL_DURATION_SEC: [f32; 2] = [4.0, 8.0];
pub const SHOWER_PETAL_OPACITY: [f32; 2] = [0.8, 1.0];
pub const SHOWER_PETAL_LINGER: Duration = Duration::from_millis(1200); // after the fall completes
pub const SHOWER_HEART_LIFETIME_SEC: [f32; 2] = [5.0, 8.0];

// Yes button burst sits a little above the viewport centre
pub const ACCEPT_BURST_Y_OFFSET_PX: f32 = -80.0;

// Page content
pub const PHOTO_PATH: &str = "/assets/us.jpeg";
