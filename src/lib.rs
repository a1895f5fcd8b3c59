//! chart-scale: scales and axis ticks for charting.
//!
//! The crate maps numeric data onto drawable output ranges and picks
//! human-readable tick values:
//! - [`crate::core::LinearScale`] composes normalization and interpolation,
//!   and carries the tick / nice protocol.
//! - [`crate::core::tick_step`] selects steps from the `{1, 2, 5} x 10^n`
//!   family and [`crate::core::ticks()`] lays ticks out on them.
//! - [`crate::core::band()`] lays out equal bands for categorical axes.
//! - [`crate::core::bisect()`] locates values in sorted sequences.
//!
//! Nothing here renders. Outputs are plain numbers or [`crate::core::Rgb`]
//! colors.
//!
//! ```rust
//! use chart_scale::core::LinearScale;
//!
//! let mut scale = LinearScale::new((0.1, 9.9), (0.0, 1.0)).unwrap();
//! scale.nice(5).unwrap();
//! assert_eq!(scale.domain(), (0.0, 10.0));
//! assert_eq!(scale.apply(5.0), 0.5);
//! assert_eq!(scale.ticks(5).unwrap(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{IdentityScale, LinearScale, Scale};
pub use error::{ScaleError, ScaleResult};
