use serde::{Deserialize, Serialize};

/// Search window `[lo, hi)` for the bisect functions.
///
/// `hi = None` means the sequence length. `hi` is clamped to the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BisectBounds {
    #[serde(default)]
    pub lo: usize,
    #[serde(default)]
    pub hi: Option<usize>,
}

impl BisectBounds {
    #[must_use]
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi: Some(hi) }
    }

    fn resolve(self, len: usize) -> (usize, usize) {
        let hi = self.hi.map_or(len, |hi| hi.min(len));
        (self.lo, hi)
    }
}

/// Lower bound: first index whose value is `>= x`, or `values.len()`.
///
/// `values` must be sorted ascending; the result is unspecified otherwise.
#[must_use]
pub fn bisect<T: PartialOrd>(values: &[T], x: &T) -> usize {
    values.partition_point(|value| value < x)
}

/// Lower bound over keys extracted by `accessor`.
#[must_use]
pub fn bisect_by_key<T, K, F>(values: &[T], x: &K, accessor: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    bisect_with(values, x, BisectBounds::default(), accessor)
}

/// Lower bound restricted to `bounds`.
///
/// Returns `bounds.lo` when the window is empty.
#[must_use]
pub fn bisect_with<T, K, F>(values: &[T], x: &K, bounds: BisectBounds, accessor: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let (lo, hi) = bounds.resolve(values.len());
    if lo >= hi {
        return lo;
    }
    lo + values[lo..hi].partition_point(|value| accessor(value) < *x)
}

/// Upper bound: first index whose value is `> x`, or `values.len()`.
#[must_use]
pub fn bisect_right<T: PartialOrd>(values: &[T], x: &T) -> usize {
    values.partition_point(|value| value <= x)
}
