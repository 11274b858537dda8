use derive_more::Deref;

/// The ascending powers of two a target can be built from: `1` up to the
/// largest power not exceeding it.
#[derive(Debug, Deref)]
pub(crate) struct WeightSet {
    #[deref]
    weights: Vec<u64>,
    total: u64,
}

impl WeightSet {
    pub fn up_to(sum: u64) -> Self {
        debug_assert!(sum > 0);

        let max_exponent = sum.ilog2();
        let weights: Vec<u64> = (0..=max_exponent).map(|k| 1u64 << k).collect();
        let total = weights.iter().sum();

        WeightSet { weights, total }
    }

    /// Whether the target is reachable at all, with every weight taken twice.
    pub fn can_reach(&self, target: u64) -> bool {
        2 * self.total >= target
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
impl WeightSet {
    pub(crate) fn from_raw(weights: Vec<u64>) -> Self {
        let total = weights.iter().sum();
        WeightSet { weights, total }
    }
}
