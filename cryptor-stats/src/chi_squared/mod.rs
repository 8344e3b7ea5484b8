// cryptor-stats/src/chi_squared/mod.rs
use crate::frequency::ENGLISH_FREQUENCIES;
use crate::observation::Observation;
use crate::{Millionths, ALPHABET_LEN, SCALE};

/// Pearson's χ² between an observation and the English reference table, in millionths.
pub fn chi_squared(observation: &Observation) -> Millionths {
    chi_squared_against(observation, &ENGLISH_FREQUENCIES)
}

/// Pearson's χ² against an arbitrary expected table (millionths per letter).
///
/// With `n` letters observed and expected frequency `f` (millionths), each
/// term `(o - e)^2 / e` is evaluated as `(o*10^6 - f*n)^2 / (f*n)`, which is
/// already scaled to millionths. Terms are truncated individually and summed
/// in ascending letter order so the result never depends on float rounding.
/// Letters with an expected frequency of zero contribute nothing.
pub fn chi_squared_against(observation: &Observation, expected: &[u32; ALPHABET_LEN]) -> Millionths {
    let total = observation.total() as i128;
    let mut sum: u128 = 0;

    for (idx, &freq) in expected.iter().enumerate() {
        if freq == 0 {
            continue;
        }
        let expected_scaled = freq as i128 * total;
        let observed_scaled = observation.count(idx) as i128 * SCALE as i128;
        let diff = observed_scaled - expected_scaled;
        let term = (diff * diff) as u128 / expected_scaled as u128;
        sum = sum.saturating_add(term);
    }

    Millionths::try_from(sum).unwrap_or(Millionths::MAX)
}
