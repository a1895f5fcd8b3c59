#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::interpolate::{Interpolate, InterpolateColor, InterpolateNumber, Rgb};
use crate::core::normalize::{denormalize, normalize};
use crate::core::ticks::{self, DEFAULT_TICK_COUNT, nice_domain};
use crate::error::{ScaleError, ScaleResult};

/// Upper bound on step recomputation rounds in [`LinearScale::nice`].
const MAX_NICE_ITERATIONS: usize = 32;

/// A mapping from input values to output values.
pub trait Scale<T> {
    type Output;

    fn apply(&self, value: T) -> Self::Output;
}

/// Construction parameters for [`LinearScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScaleConfig<R, I = InterpolateNumber> {
    pub domain: (f64, f64),
    pub range: (R, R),
    pub interpolator: I,
}

impl<R> LinearScaleConfig<R> {
    /// Creates a config using the numeric interpolator.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (R, R)) -> Self {
        Self {
            domain,
            range,
            interpolator: InterpolateNumber,
        }
    }
}

impl<R, I> LinearScaleConfig<R, I> {
    #[must_use]
    pub fn with_interpolator<J>(self, interpolator: J) -> LinearScaleConfig<R, J> {
        LinearScaleConfig {
            domain: self.domain,
            range: self.range,
            interpolator,
        }
    }
}

/// Continuous scale: normalizes an input against its domain, then
/// interpolates the result into its range.
///
/// The domain may be increasing or decreasing but never empty. Inputs
/// outside the domain extrapolate. `nice` is the only operation that
/// rewrites the domain and it needs exclusive access.
///
/// Serializes with the same shape as [`LinearScaleConfig`] and deserializes
/// through [`LinearScale::from_config`], so a degenerate domain is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearScaleConfig<R, I>")]
pub struct LinearScale<R = f64, I = InterpolateNumber> {
    domain: (f64, f64),
    range: (R, R),
    interpolator: I,
}

impl LinearScale {
    /// Creates a numeric scale from `domain` to `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScaleResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScaleError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        Self::from_config(LinearScaleConfig::new(domain, range))
    }
}

impl LinearScale<Rgb, InterpolateColor> {
    /// Creates a scale from `domain` to a color gradient.
    pub fn color(domain: (f64, f64), range: (Rgb, Rgb)) -> ScaleResult<Self> {
        Self::from_config(LinearScaleConfig::new(domain, range).with_interpolator(InterpolateColor))
    }
}

impl<R, I> LinearScale<R, I> {
    pub fn from_config(config: LinearScaleConfig<R, I>) -> ScaleResult<Self> {
        Ok(Self {
            domain: validate_domain(config.domain)?,
            range: config.range,
            interpolator: config.interpolator,
        })
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }

    /// Returns a copy with `domain` replacing the current one.
    pub fn with_domain(mut self, domain: (f64, f64)) -> ScaleResult<Self> {
        self.domain = validate_domain(domain)?;
        Ok(self)
    }

    /// Nice step for roughly `count` ticks across the current domain.
    pub fn tick_step(&self, count: usize) -> ScaleResult<f64> {
        ticks::tick_step(self.domain.0, self.domain.1, count)
    }

    /// Ascending tick values across the current domain.
    pub fn ticks(&self, count: usize) -> ScaleResult<Vec<f64>> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn ticks_default(&self) -> ScaleResult<Vec<f64>> {
        self.ticks(DEFAULT_TICK_COUNT)
    }

    /// Extends the domain outward to multiples of the tick step for `count`.
    ///
    /// The step is recomputed from the widened domain until the domain stops
    /// moving, so a second call with the same `count` leaves it unchanged.
    /// Some domains never settle (a single tick across zero doubles the step
    /// every round); those fall back to one pass from the original domain.
    /// On error the domain is left untouched.
    pub fn nice(&mut self, count: usize) -> ScaleResult<()> {
        let before = self.domain();
        let mut domain = before;

        for iteration in 1..=MAX_NICE_ITERATIONS {
            let Ok(step) = ticks::tick_step(domain.0, domain.1, count) else {
                break;
            };
            let niced = nice_domain(domain, step);
            if niced == domain {
                debug!(
                    from = ?before,
                    to = ?domain,
                    step,
                    iterations = iteration,
                    "nice scale domain"
                );
                return self.commit_domain(domain);
            }
            domain = niced;
        }

        let step = ticks::tick_step(before.0, before.1, count)?;
        let single_pass = nice_domain(before, step);
        warn!(
            from = ?before,
            to = ?single_pass,
            count,
            "nice scale domain did not settle, using a single pass"
        );
        self.commit_domain(single_pass)
    }

    /// Consuming variant of [`LinearScale::nice`].
    pub fn niced(mut self, count: usize) -> ScaleResult<Self> {
        self.nice(count)?;
        Ok(self)
    }

    fn commit_domain(&mut self, domain: (f64, f64)) -> ScaleResult<()> {
        self.domain = validate_domain(domain)?;
        Ok(())
    }
}

impl<R: Copy, I> LinearScale<R, I> {
    #[must_use]
    pub fn range(&self) -> (R, R) {
        self.range
    }
}

impl<R: Copy, I: Interpolate<R>> LinearScale<R, I> {
    /// Maps `value` from the domain into the range.
    pub fn apply(&self, value: f64) -> I::Output {
        let t = normalize(value, self.domain.0, self.domain.1);
        self.interpolator.interpolate(t, self.range.0, self.range.1)
    }

    /// Maps every value in `values`, preserving order.
    pub fn apply_all(&self, values: &[f64]) -> Vec<I::Output>
    where
        R: Sync,
        I: Sync,
        I::Output: Send,
    {
        #[cfg(feature = "parallel-projection")]
        {
            values.par_iter().map(|value| self.apply(*value)).collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            values.iter().map(|value| self.apply(*value)).collect()
        }
    }
}

impl<I> LinearScale<f64, I> {
    /// Maps an output value back into the domain.
    pub fn invert(&self, output: f64) -> ScaleResult<f64> {
        if !output.is_finite() {
            return Err(ScaleError::InvalidData("output must be finite".to_owned()));
        }
        let (range_start, range_end) = self.range;
        if range_start == range_end {
            return Err(ScaleError::InvalidData(
                "cannot invert a scale with a zero-span range".to_owned(),
            ));
        }

        let t = normalize(output, range_start, range_end);
        Ok(denormalize(t, self.domain.0, self.domain.1))
    }
}

impl<R, I> TryFrom<LinearScaleConfig<R, I>> for LinearScale<R, I> {
    type Error = ScaleError;

    fn try_from(config: LinearScaleConfig<R, I>) -> ScaleResult<Self> {
        Self::from_config(config)
    }
}

impl<R: Copy, I: Interpolate<R>> Scale<f64> for LinearScale<R, I> {
    type Output = I::Output;

    fn apply(&self, value: f64) -> I::Output {
        LinearScale::apply(self, value)
    }
}

/// Scale that returns its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityScale;

impl IdentityScale {
    #[must_use]
    pub fn apply<T>(&self, value: T) -> T {
        value
    }
}

impl<T> Scale<T> for IdentityScale {
    type Output = T;

    fn apply(&self, value: T) -> T {
        value
    }
}

fn validate_domain(domain: (f64, f64)) -> ScaleResult<(f64, f64)> {
    let (start, end) = domain;
    if !start.is_finite() || !end.is_finite() {
        return Err(ScaleError::InvalidData(
            "scale domain must be finite".to_owned(),
        ));
    }
    if start == end {
        return Err(ScaleError::DegenerateDomain { start, end });
    }
    Ok(domain)
}
