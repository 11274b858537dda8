//! Count the ways a positive integer can be written as a sum of powers of
//! two, where each power may be used at most twice.
//!
//! Sums like these are sometimes called hyperbinary representations. `5` has
//! two of them, `4 + 1` and `2 + 2 + 1`. [`solve`] reports how many exist
//! for a target without materializing any of them.
//!
//! The search walks the candidate powers from largest to smallest and
//! decides, per power, whether to take zero, one, or two copies. Two things
//! keep that tree well below its worst-case `O(3^n)` shape:
//!
//! - branches whose undecided powers fall short of the target, even when
//!   every one is taken twice, are cut immediately,
//! - states revisited on different branches are looked up instead of
//!   recounted.
//!
//! Each call to [`solve`] owns its weights and its memo table, so
//! independent calls can run on separate threads without coordination.

use derive_more::{Display, Error};

mod counting;
mod weights;

use counting::Counter;
use weights::WeightSet;

/// The largest target [`solve`] accepts.
///
/// Targets above this would need the weight `2^63`, and doubling that set's
/// total no longer fits in 64 bits. Oversized targets are rejected as
/// [`SolveError::SumTooLarge`] rather than letting the arithmetic wrap.
pub const MAX_SUM: u64 = (1 << 63) - 1;

/// Why [`solve`] rejected its input.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum SolveError {
    /// There are no powers of two less than or equal to `0`.
    #[display(fmt = "sum must be positive")]
    ZeroSum,

    /// The sum is larger than [`MAX_SUM`].
    #[display(fmt = "sum exceeds the supported maximum of {}", "crate::MAX_SUM")]
    SumTooLarge,
}

/// Count the ways `sum` splits into powers of two, each used at most twice.
pub fn solve(sum: u64) -> Result<u64, SolveError> {
    if sum == 0 {
        return Err(SolveError::ZeroSum);
    }
    if sum > MAX_SUM {
        return Err(SolveError::SumTooLarge);
    }

    let weights = WeightSet::up_to(sum);
    if !weights.can_reach(sum) {
        // Unreachable for sets the builder derives: their doubled total is
        // always at least the target.
        log::warn!("{} unreachable even with every weight doubled", sum);
        return Ok(0);
    }

    Ok(Counter::new(&weights).count(sum))
}
