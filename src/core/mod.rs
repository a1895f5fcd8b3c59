pub mod band;
pub mod bisect;
pub mod interpolate;
pub mod normalize;
pub mod scale;
pub mod ticks;

pub use band::{BandConfig, BandLayout, BandScale, band};
pub use bisect::{BisectBounds, bisect, bisect_by_key, bisect_right, bisect_with};
pub use interpolate::{
    Interpolate, InterpolateColor, InterpolateFn, InterpolateNumber, Rgb, interpolate_color,
    interpolate_number,
};
pub use normalize::{denormalize, normalize};
pub use scale::{IdentityScale, LinearScale, LinearScaleConfig, Scale};
pub use ticks::{
    DEFAULT_TICK_COUNT, MIN_TICK_STEP, TICK_PRECISION, ceil_to_step, floor_to_step, nice_domain,
    snap, tick_step, ticks,
};
