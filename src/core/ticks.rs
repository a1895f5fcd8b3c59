//! Nice tick steps, tick sequences and domain nicing.
//!
//! Steps are restricted to the `{1, 2, 5} x 10^n` family. Every value this
//! module emits passes through [`snap`], a fixed-precision rounding that
//! removes binary floating-point noise such as `0.30000000000000004`.

use tracing::trace;

use crate::error::{ScaleError, ScaleResult};

/// Tick count used by the `*_default` conveniences.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Precision of [`snap`]: values are rounded to the nearest `1e-12`.
pub const TICK_PRECISION: f64 = 1e12;

/// Smallest step whose multiples stay distinct after [`snap`].
///
/// Ladder steps around the cut are `1e-12` and `5e-13`; the cut sits between
/// them so rounding in `10^n` cannot move a rung across it.
pub const MIN_TICK_STEP: f64 = 0.75 / TICK_PRECISION;

// Ulps of the larger bound a step must exceed to keep neighbouring ticks apart.
const MIN_STEP_ULPS: f64 = 4.0;

// Thresholds on the ratio between the requested and the decade step.
const STEP_ERROR_TEN: f64 = 7.071_067_811_865_475_244; // sqrt(50)
const STEP_ERROR_FIVE: f64 = 3.162_277_660_168_379_332; // sqrt(10)
const STEP_ERROR_TWO: f64 = std::f64::consts::SQRT_2;

/// Rounds `value` to [`TICK_PRECISION`].
///
/// Magnitudes too large to scale are returned unchanged.
#[must_use]
pub fn snap(value: f64) -> f64 {
    let scaled = value * TICK_PRECISION;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / TICK_PRECISION
}

/// Returns the largest multiple of `step` not above `value`.
#[must_use]
pub fn floor_to_step(value: f64, step: f64) -> f64 {
    snap(step * snap(value / step).floor())
}

/// Returns the smallest multiple of `step` not below `value`.
#[must_use]
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    snap(step * snap(value / step).ceil())
}

/// Chooses a nice interval for roughly `count` ticks across `[min, max]`.
///
/// Bounds may be given in either order. The result is always a positive
/// `b * 10^n` with `b` in `{1, 2, 5}`.
///
/// Fails with [`ScaleError::InvalidArgument`] when the step would be finer
/// than [`MIN_TICK_STEP`] or too fine to separate ticks at the magnitude of
/// the bounds.
pub fn tick_step(min: f64, max: f64, count: usize) -> ScaleResult<f64> {
    validate_bounds(min, max)?;
    validate_count(count)?;
    if min == max {
        return Err(ScaleError::DegenerateDomain {
            start: min,
            end: max,
        });
    }

    let raw_step = (max - min).abs() / count as f64;
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Err(ScaleError::InvalidData(format!(
            "tick span is not representable: min={min}, max={max}, count={count}"
        )));
    }

    let step = nice_step(raw_step);
    let magnitude = min.abs().max(max.abs());
    if step < MIN_TICK_STEP || step <= magnitude * f64::EPSILON * MIN_STEP_ULPS {
        return Err(ScaleError::InvalidArgument(format!(
            "tick step {step} is too fine to resolve: min={min}, max={max}, count={count}"
        )));
    }

    Ok(step)
}

/// Rounds a positive raw interval onto the `{1, 2, 5} x 10^n` ladder.
fn nice_step(raw_step: f64) -> f64 {
    let exponent = raw_step.log10().floor() as i32;
    let decade = 10_f64.powi(exponent);
    let error = raw_step / decade;

    if error >= STEP_ERROR_TEN {
        decade * 10.0
    } else if error >= STEP_ERROR_FIVE {
        decade * 5.0
    } else if error >= STEP_ERROR_TWO {
        decade * 2.0
    } else {
        decade
    }
}

/// Generates ascending tick values across `[min, max]`.
///
/// Every tick is a snapped multiple of [`tick_step`]. The number of ticks
/// follows from the span and the step and may differ from `count`.
/// Reversed bounds produce the same ascending sequence; equal bounds produce
/// the single tick at that value.
pub fn ticks(min: f64, max: f64, count: usize) -> ScaleResult<Vec<f64>> {
    validate_bounds(min, max)?;
    validate_count(count)?;
    if min == max {
        return Ok(vec![snap(min)]);
    }

    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let step = tick_step(low, high, count)?;
    let start = snap(low / step).ceil();
    let stop = snap(high / step).floor();

    let values: Vec<f64> = if stop < start {
        Vec::new()
    } else {
        let n = (stop - start + 1.0).ceil() as usize;
        (0..n).map(|i| snap((start + i as f64) * step)).collect()
    };

    trace!(
        min,
        max,
        count,
        step,
        tick_count = values.len(),
        "generate ticks"
    );
    Ok(values)
}

/// Extends `domain` outward to multiples of `step`, keeping its orientation.
#[must_use]
pub fn nice_domain(domain: (f64, f64), step: f64) -> (f64, f64) {
    let (start, end) = domain;
    if start <= end {
        (floor_to_step(start, step), ceil_to_step(end, step))
    } else {
        (ceil_to_step(start, step), floor_to_step(end, step))
    }
}

fn validate_bounds(min: f64, max: f64) -> ScaleResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ScaleError::InvalidData(
            "tick bounds must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn validate_count(count: usize) -> ScaleResult<()> {
    if count == 0 {
        return Err(ScaleError::InvalidArgument(
            "tick count must be > 0".to_owned(),
        ));
    }
    Ok(())
}
