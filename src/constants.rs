// --- Race Constants ---
pub const CHECKPOINT_RADIUS: f64 = 600.0;
pub const POD_RADIUS: f64 = 400.0;

pub const DRAG_FACTOR: f64 = 0.85; // Applied to the raw position delta
pub const MAX_THRUST: u32 = 100;
pub const BOOST_TOKEN: &str = "BOOST";

pub const DRIFT_PROJECTION_TURNS: f64 = 3.0; // Turns of drift to aim against

pub const LOG_FILE_NAME: &str = "pod-racer.log";
