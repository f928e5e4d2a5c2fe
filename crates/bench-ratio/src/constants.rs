//! Calibration constants.

/// Weight of a single storage read.
pub const DB_READ_COST: u64 = 25_000_000;

/// Weight of a single storage write.
pub const DB_WRITE_COST: u64 = 100_000_000;

/// The derived ratio is rounded up to a multiple of this value.
pub const RATIO_ROUNDING: u64 = 1_000;

/// Location of the gas measurements written by the bench generator,
/// relative to the working directory.
pub const DEFAULT_COST_TABLE_PATH: &str = "build/benches.json";
