//! Shared constants used across performance calculations.
//!
//! The compressibility penalty shape, the reference climb speed and the
//! turn-speed heuristic are balance constants, not physical ones; their
//! values are part of the model's contract and changing them changes every
//! reported figure.

/// Watts per mechanical horsepower
pub const WATTS_PER_HORSEPOWER: f64 = 745.7;

/// km/h per m/s
pub const KMH_PER_MS: f64 = 3.6;

/// Lower bound of the equilibrium-speed search grid (m/s)
pub const SPEED_SEARCH_MIN_MS: u32 = 50;

/// Upper bound of the equilibrium-speed search grid, inclusive (m/s)
pub const SPEED_SEARCH_MAX_MS: u32 = 350;

/// Speed floor for the thrust term inside the search (m/s)
pub const THRUST_SPEED_FLOOR_MS: f64 = 1.0;

/// Speed floor for the thrust term in the reported point (m/s)
pub const REPORT_SPEED_FLOOR_MS: f64 = 30.0;

/// Speed at which the compressibility drag penalty starts (km/h)
pub const COMPRESSIBILITY_ONSET_KMH: f64 = 400.0;

/// Scale of the quadratic compressibility penalty (km/h)
pub const COMPRESSIBILITY_SCALE_KMH: f64 = 200.0;

/// Drag-coefficient weight of the compressibility penalty
pub const COMPRESSIBILITY_PENALTY_CD: f64 = 0.005;

/// Assumed indicated climb speed (m/s)
pub const CLIMB_REFERENCE_SPEED_MS: f64 = 80.0;

/// Climb rate defining the service ceiling (m/s)
pub const SERVICE_CEILING_CLIMB_MS: f64 = 0.5;

/// Upper bound of the service-ceiling sweep (m)
pub const CEILING_SWEEP_MAX_M: u32 = 15_000;

/// Altitude step of the service-ceiling sweep (m)
pub const CEILING_SWEEP_STEP_M: u32 = 250;

/// Ceiling cap for designs without a pressurized cabin (m)
pub const CEILING_CAP_NO_PRESSURIZED_M: f64 = 10_000.0;

/// Ceiling cap for designs without an oxygen system (m)
pub const CEILING_CAP_NO_OXYGEN_M: f64 = 5_000.0;

/// Structural limit on the sustained-turn load factor (g)
pub const STRUCTURAL_LOAD_FACTOR_LIMIT: f64 = 4.5;

/// Reference altitude for the turn model's air density (m)
pub const TURN_REFERENCE_ALTITUDE_M: f64 = 2_000.0;

/// Turn speed as a fraction of the rated-altitude equilibrium speed
pub const TURN_SPEED_FRACTION: f64 = 0.8;

/// Floor on `n² - 1` in the turn-radius denominator
pub const TURN_LOAD_MARGIN_FLOOR: f64 = 0.01;

/// Shortest reportable sustained-turn time (s)
pub const TURN_TIME_MIN_S: f64 = 12.0;

/// Longest reportable sustained-turn time (s)
pub const TURN_TIME_MAX_S: f64 = 60.0;
