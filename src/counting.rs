use crate::weights::WeightSet;

use std::collections::HashMap;

/// Walks the weights from largest to smallest, taking each zero, one, or two
/// times, and counts the choices that land exactly on the target.
pub(crate) struct Counter<'w> {
    weights: &'w WeightSet,
    memo: HashMap<(u64, usize), u64>,
}

impl<'w> Counter<'w> {
    pub fn new(weights: &'w WeightSet) -> Self {
        Counter {
            weights,
            memo: HashMap::new(),
        }
    }

    pub fn count(&mut self, target: u64) -> u64 {
        let count = self.count_from(target, self.weights.len(), self.weights.total());
        log::debug!(
            "counted {} ways to reach {} across {} memoized states",
            count,
            target,
            self.memo.len()
        );
        count
    }

    /// `level` is how many of the smallest weights are still undecided;
    /// `remaining` is their sum.
    fn count_from(&mut self, target: u64, level: usize, mut remaining: u64) -> u64 {
        if let Some(&count) = self.memo.get(&(target, level)) {
            return count;
        }

        if target == 0 {
            return 1;
        }

        // Out of weights, or the undecided weights fall short of the target
        // even when every one is taken twice.
        if level == 0 || 2 * remaining < target {
            return 0;
        }

        let weight = self.weights[level - 1];
        remaining -= weight;

        let mut count = 0;
        for copies in 0..3u64 {
            let gained = copies * weight;
            if gained <= target {
                count += self.count_from(target - gained, level - 1, remaining);
            }
        }

        self.memo.insert((target, level), count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(target: u64) -> u64 {
        let weights = WeightSet::up_to(target);
        Counter::new(&weights).count(target)
    }

    fn exhaustive(weights: &[u64], target: u64) -> u64 {
        match weights.split_last() {
            None => (target == 0) as u64,
            Some((&weight, rest)) => (0..3u64)
                .filter(|copies| copies * weight <= target)
                .map(|copies| exhaustive(rest, target - copies * weight))
                .sum(),
        }
    }

    #[test]
    fn matches_exhaustive_enumeration() {
        for target in 1..=200 {
            let weights = WeightSet::up_to(target);
            assert_eq!(
                Counter::new(&weights).count(target),
                exhaustive(&weights, target),
                "target {}",
                target
            );
        }
    }

    #[quickcheck_macros::quickcheck]
    fn memoization_never_changes_the_count(target: u64) -> bool {
        let target = target % 200 + 1;
        let weights = WeightSet::up_to(target);
        Counter::new(&weights).count(target) == exhaustive(&weights, target)
    }

    #[test]
    fn known_small_counts() {
        assert_eq!(count(5), 2); // 4+1, 2+2+1
        assert_eq!(count(7), 1); // 4+2+1
        assert_eq!(count(8), 4); // 8, 4+4, 4+2+2, 4+2+1+1
    }

    #[test]
    fn underweight_set_counts_zero() {
        let weights = WeightSet::from_raw(vec![1, 2]);
        assert_eq!(Counter::new(&weights).count(7), 0);
    }
}
