//! Decimal rounding for reported figures.

/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value to the nearest decimal and breaks exact ties
/// to even, so `6.25` becomes `6.2` and `0.0625` becomes `0.062`.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// [`round_to`] one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// [`round_to`] three decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    round_to(value, 3)
}
