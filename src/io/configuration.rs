//! Walk constants and runtime configuration defaults

// Reseeded at the start of every run so identical inputs give identical output
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 101;

/// Default number of marker slots (and walk steps) per run
pub const DEFAULT_MARKER_COUNT: usize = 500;

/// Default distance in image cells between a cell and its neighbor candidates
pub const DEFAULT_STEP_SIZE: u32 = 4;

/// Default weight of the flow term against color similarity
pub const DEFAULT_FLOW_AMOUNT: f32 = 0.0001;

/// Largest accepted flow weight
pub const MAX_FLOW_AMOUNT: f32 = 0.005;

/// Default upper bound of the non-negative candidate jitter
pub const DEFAULT_RANDOMNESS: f32 = 2.0;

/// Default number of recent placements a new marker is balanced against
pub const DEFAULT_BALANCE_WINDOW: usize = 4;

/// Elevation assigned to every world position produced from image space
pub const DEFAULT_ELEVATION: f32 = 2.0;

// Cyclic scale ramp: 0.25, 0.5, 0.75, 1.0, 1.25 times the step size
/// Number of distinct scales in the cyclic ramp
pub const SCALE_CYCLE_LENGTH: usize = 5;
/// Multiplier applied to each ramp position
pub const CYCLIC_SCALE_FACTOR: f32 = 0.25;

/// Upper bound of the balanced-scale jitter as a fraction of the scale
pub const BALANCE_JITTER_FRACTION: f32 = 0.2;

// Host trigger timing, in host seconds
/// Minimum time between two accepted manual regeneration triggers
pub const REGENERATE_COOLDOWN_SECS: f64 = 0.5;
/// Time after start-up before property changes regenerate immediately
pub const PROPERTY_TRIGGER_WARMUP_SECS: f64 = 1.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_scatter";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// RGBA color of the debug path overlay
pub const PATH_COLOR: [u8; 4] = [0, 255, 0, 255];
