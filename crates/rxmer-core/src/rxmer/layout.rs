pub const NO_MEASUREMENT: u8 = 0xFF;

pub const STEPS_PER_DB: f64 = 4.0;
pub const MIN_REPORTED_DB: f64 = 0.0;
pub const MAX_REPORTED_DB: f64 = 63.5;
