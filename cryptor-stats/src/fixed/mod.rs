// cryptor-stats/src/fixed/mod.rs
use libm::round;

use crate::{Millionths, SCALE};

/// Clamps a value into the closed unit interval. `NaN` maps to `0.0`.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Clamps `value` into `[0, 1]` and rounds it to the nearest millionth.
pub fn to_millionths(value: f64) -> Millionths {
    round(clamp_unit(value) * SCALE as f64) as Millionths
}

/// Converts a fixed-point value back into a float for display or further math.
pub fn from_millionths(value: Millionths) -> f64 {
    value as f64 / SCALE as f64
}

/// `numerator / denominator` in millionths, truncated. Zero when the denominator is zero.
pub fn ratio_millionths(numerator: u64, denominator: u64) -> Millionths {
    if denominator == 0 {
        return 0;
    }
    ((numerator as u128 * SCALE as u128) / denominator as u128) as Millionths
}
