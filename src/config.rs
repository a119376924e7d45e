//! Compiled-in simulation constants.

/// Seconds a particle lives after it is spawned.
pub const TTL: f64 = 5.0;
/// Downward acceleration in world units per second squared.
pub const GRAVITY: f64 = 1000.0;
/// Per-frame shrink factor applied about the particle's center.
pub const SCALE: f64 = 0.999;

pub const PARTICLES_PER_CLICK: usize = 5;
pub const MIN_POINTS: usize = 25;
pub const MAX_POINTS: usize = 50;

/// Bounds on the magnitude of each initial velocity component; the sign is
/// drawn separately.
pub const MIN_SPEED: f64 = 100.0;
pub const MAX_SPEED: f64 = 700.0;

pub const MIN_RADIUS: f64 = 20.0;
pub const MAX_RADIUS: f64 = 80.0;

/// Absolute tolerance used by the self-test comparisons.
pub const EPSILON: f64 = 1e-4;

/// Outline vertex count of the particle built for the startup self-test.
pub const SELF_TEST_POINTS: usize = 4;

pub const WINDOW_TITLE: &str = "Particles";
