// Physical Constants
pub const STANDARD_GRAVITY: f64 = -9.81; // m/s², vertical axis points up

// Free-fall detection
pub const FREE_FALL_TOLERANCE: f64 = 0.05; // relative, applied to STANDARD_GRAVITY

// Flight data
pub const PRIMARY_BRANCH: usize = 0; // sustainer trajectory

// Synthetic profile
pub const TIME_STEP: f64 = 0.05; // s
pub const PARACHUTE_DESCENT_RATE: f64 = -6.0; // m/s
