/// Returns the fractional position of `value` inside `[start, stop]`.
///
/// Values outside the domain extrapolate below `0` or above `1`; nothing is
/// clamped. Callers must guarantee `start != stop`, otherwise the result is
/// `NaN` or infinite. [`crate::core::LinearScale`] rejects such domains at
/// construction.
#[must_use]
pub fn normalize(value: f64, start: f64, stop: f64) -> f64 {
    (value - start) / (stop - start)
}

/// Inverse of [`normalize`]: maps a fraction back into `[start, stop]`.
#[must_use]
pub fn denormalize(t: f64, start: f64, stop: f64) -> f64 {
    start + (stop - start) * t
}
