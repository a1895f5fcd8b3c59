use serde::{Deserialize, Serialize};

use crate::core::{Interpolate, LinearScale};
use crate::error::ScaleResult;

/// Serializable deterministic view of a numeric scale and its axis ticks,
/// used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSnapshot {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub tick_count: usize,
    pub step: f64,
    pub ticks: Vec<f64>,
}

impl<I: Interpolate<f64, Output = f64>> LinearScale<f64, I> {
    /// Captures domain, range and the ticks generated for `tick_count`.
    pub fn snapshot(&self, tick_count: usize) -> ScaleResult<ScaleSnapshot> {
        Ok(ScaleSnapshot {
            domain: self.domain(),
            range: self.range(),
            tick_count,
            step: self.tick_step(tick_count)?,
            ticks: self.ticks(tick_count)?,
        })
    }
}
