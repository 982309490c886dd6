// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11; // N⋅m²/kg²
pub const ASTRONOMICAL_UNIT: f64 = 146.0e9; // meters

// Simulation Parameters
pub const TIME_STEP: f64 = 86_400.0; // s (one day per tick)
pub const DEFAULT_TICKS: u64 = 365;

// Display Parameters
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_FACTOR: f64 = 1.1; // per scroll notch
pub const VIEWPORT_WIDTH: f64 = 800.0; // px
pub const VIEWPORT_HEIGHT: f64 = 800.0; // px

// Time unit conversion factors, each relative to the previous unit
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

// Solar Constants
pub const SUN_MASS: f64 = 1.9885 * 1e30; // kg
pub const SUN_RADIUS: f64 = 695_660.0; // km
