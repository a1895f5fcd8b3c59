use std::fmt;

use serde::{Deserialize, Serialize};

/// Maps a normalized position `t` between two range endpoints.
///
/// `t` is expected in `[0, 1]` but is not required to be; implementations
/// extrapolate outside it.
pub trait Interpolate<R> {
    type Output;

    fn interpolate(&self, t: f64, start: R, stop: R) -> Self::Output;
}

/// Linear numeric interpolation.
#[must_use]
pub fn interpolate_number(t: f64, start: f64, stop: f64) -> f64 {
    // Weighted form keeps both endpoints exact at t = 0 and t = 1.
    start * (1.0 - t) + stop * t
}

/// Per-channel linear interpolation between two colors.
#[must_use]
pub fn interpolate_color(t: f64, start: Rgb, stop: Rgb) -> Rgb {
    Rgb {
        r: interpolate_number(t, start.r, stop.r),
        g: interpolate_number(t, start.g, stop.g),
        b: interpolate_number(t, start.b, stop.b),
    }
}

/// RGB color with unclamped channels on the nominal `0..=255` scale.
///
/// Interpolating out-of-range inputs, or extrapolating with `t` outside
/// `[0, 1]`, yields out-of-range channels as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }
}

impl fmt::Display for Rgb {
    /// Formats as CSS: `rgb(r, g, b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Default interpolator for numeric ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterpolateNumber;

impl Interpolate<f64> for InterpolateNumber {
    type Output = f64;

    fn interpolate(&self, t: f64, start: f64, stop: f64) -> f64 {
        interpolate_number(t, start, stop)
    }
}

/// Interpolator for color ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterpolateColor;

impl Interpolate<Rgb> for InterpolateColor {
    type Output = Rgb;

    fn interpolate(&self, t: f64, start: Rgb, stop: Rgb) -> Rgb {
        interpolate_color(t, start, stop)
    }
}

/// Adapts a plain function or closure into an [`Interpolate`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct InterpolateFn<F>(pub F);

impl<R, O, F> Interpolate<R> for InterpolateFn<F>
where
    F: Fn(f64, R, R) -> O,
{
    type Output = O;

    fn interpolate(&self, t: f64, start: R, stop: R) -> O {
        (self.0)(t, start, stop)
    }
}
