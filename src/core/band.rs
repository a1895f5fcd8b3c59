use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ScaleError, ScaleResult};

/// Input of the band partitioner: categories, output range and padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig<K> {
    pub domain: Vec<K>,
    pub range: (f64, f64),
    /// Fraction of each step left empty, in `[0, 1)`.
    #[serde(default)]
    pub padding: f64,
}

impl<K> BandConfig<K> {
    #[must_use]
    pub fn new(domain: Vec<K>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding: 0.0,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn validate(&self) -> ScaleResult<()> {
        if !self.range.0.is_finite() || !self.range.1.is_finite() {
            return Err(ScaleError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !self.padding.is_finite() || !(0.0..1.0).contains(&self.padding) {
            return Err(ScaleError::InvalidArgument(format!(
                "band padding must be in [0, 1), got {}",
                self.padding
            )));
        }
        Ok(())
    }
}

/// Computed band geometry, one band start per domain entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLayout {
    /// Distance between the starts of two neighbouring bands.
    pub step: f64,
    pub band_width: f64,
    pub band_range: Vec<f64>,
}

impl BandLayout {
    /// Gap left before the first band, between bands and after the last one.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.step - self.band_width
    }
}

/// Partitions `config.range` into one equal band per domain entry.
///
/// With `n` entries the padded span `step * (n + padding)` equals the range
/// span. An empty domain yields an empty layout with zero step and width.
pub fn band<K>(config: &BandConfig<K>) -> ScaleResult<BandLayout> {
    config.validate()?;
    Ok(layout_for_count(config.domain.len(), config.range, config.padding))
}

fn layout_for_count(n: usize, range: (f64, f64), padding: f64) -> BandLayout {
    if n == 0 {
        return BandLayout {
            step: 0.0,
            band_width: 0.0,
            band_range: Vec::new(),
        };
    }

    let (r0, r1) = range;
    let step = (r1 - r0) / (n as f64 + padding);
    let band_width = step * (1.0 - padding);
    let interval = step - band_width;
    let band_range = (0..n).map(|i| r0 + interval + step * i as f64).collect();

    trace!(n, step, band_width, "compute band layout");
    BandLayout {
        step,
        band_width,
        band_range,
    }
}

/// Categorical scale mapping each distinct key to the start of its band.
///
/// Keys keep their first-seen order; duplicates collapse into one band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K: Hash + Eq> {
    keys: IndexSet<K>,
    layout: BandLayout,
}

impl<K: Hash + Eq> BandScale<K> {
    pub fn new(config: BandConfig<K>) -> ScaleResult<Self> {
        config.validate()?;
        let BandConfig {
            domain,
            range,
            padding,
        } = config;
        let keys: IndexSet<K> = domain.into_iter().collect();
        let layout = layout_for_count(keys.len(), range, padding);
        Ok(Self { keys, layout })
    }

    /// Returns the band start for `key`, or `None` for an unknown key.
    #[must_use]
    pub fn apply(&self, key: &K) -> Option<f64> {
        self.keys
            .get_index_of(key)
            .map(|index| self.layout.band_range[index])
    }

    #[must_use]
    pub fn center(&self, key: &K) -> Option<f64> {
        self.apply(key).map(|start| start + self.layout.band_width * 0.5)
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.layout.band_width
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.layout.step
    }

    #[must_use]
    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}
