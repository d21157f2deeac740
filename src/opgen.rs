//! Deterministic operation streams for demos, tests, and benchmarks.
//!
//! The classic ODT workload is generated by a tiny linear congruential
//! generator: `seed = (seed * 7 + 13) mod 1_000_000_007`. This module
//! reproduces that workload as a pluggable `Iterator` of [`Op`] records so
//! the tree itself never depends on a randomness source.

use crate::error::Result;
use crate::tree::ChthollyTree;

const LCG_MULTIPLIER: i64 = 7;
const LCG_INCREMENT: i64 = 13;
const LCG_MODULUS: i64 = 1_000_000_007;

/// The linear congruential generator driving the classic demo workload.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Create a generator from a seed. The seed is reduced into the
    /// generator's modulus, so any `i64` is accepted.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_MODULUS),
        }
    }

    /// Return the current state and advance. Outputs lie in
    /// `[0, 1_000_000_007)`.
    pub fn next_value(&mut self) -> i64 {
        let ret = self.state;
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        ret
    }
}

/// Generate the demo's initial sequence: `n` values in `[1, v_max]`.
pub fn initial_values(rng: &mut Lcg, n: usize, v_max: i64) -> Vec<i64> {
    debug_assert!(v_max > 0);
    (0..n).map(|_| (rng.next_value() % v_max) + 1).collect()
}

/// One range operation with its arguments.
///
/// Ranges are 0-indexed and inclusive, matching [`ChthollyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Add `x` to every value in `[lo, hi]`.
    Add {
        /// Inclusive lower bound.
        lo: usize,
        /// Inclusive upper bound.
        hi: usize,
        /// Amount to add.
        x: i64,
    },
    /// Assign `x` to every value in `[lo, hi]`.
    Assign {
        /// Inclusive lower bound.
        lo: usize,
        /// Inclusive upper bound.
        hi: usize,
        /// Value to assign.
        x: i64,
    },
    /// Query the `k`-th smallest value in `[lo, hi]` (1-based).
    Kth {
        /// Inclusive lower bound.
        lo: usize,
        /// Inclusive upper bound.
        hi: usize,
        /// 1-based rank within the sub-range.
        k: usize,
    },
    /// Query `sum of value^x` over `[lo, hi]`, reduced mod `y`.
    PowSum {
        /// Inclusive lower bound.
        lo: usize,
        /// Inclusive upper bound.
        hi: usize,
        /// Exponent.
        x: u64,
        /// Modulus, always positive as generated.
        y: i64,
    },
}

/// An iterator producing the demo workload's operation stream.
///
/// Reproduces the classic driver's distribution: uniform choice among the
/// four operations, endpoints drawn uniformly and swapped into order, `k`
/// uniform in `[1, hi - lo + 1]`, and `x`/`y` uniform in `[1, v_max]`.
#[derive(Debug, Clone)]
pub struct OpStream {
    rng: Lcg,
    n: usize,
    v_max: i64,
    remaining: usize,
}

impl OpStream {
    /// Create a stream of `count` operations over a sequence of length `n`.
    ///
    /// Pass the same [`Lcg`] used for [`initial_values`] to reproduce the
    /// classic demo exactly. An `n` of 0 yields an empty stream, since no
    /// valid range exists.
    pub fn new(rng: Lcg, n: usize, v_max: i64, count: usize) -> Self {
        debug_assert!(v_max > 0);
        Self {
            rng,
            n,
            v_max,
            remaining: if n == 0 { 0 } else { count },
        }
    }
}

impl Iterator for OpStream {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let kind = self.rng.next_value() % 4 + 1;
        let mut lo = (self.rng.next_value() % self.n as i64) as usize;
        let mut hi = (self.rng.next_value() % self.n as i64) as usize;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let x = if kind == 3 {
            self.rng.next_value() % (hi - lo + 1) as i64 + 1
        } else {
            self.rng.next_value() % self.v_max + 1
        };

        Some(match kind {
            1 => Op::Add { lo, hi, x },
            2 => Op::Assign { lo, hi, x },
            3 => Op::Kth { lo, hi, k: x as usize },
            _ => {
                let y = self.rng.next_value() % self.v_max + 1;
                Op::PowSum { lo, hi, x: x as u64, y }
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OpStream {}

/// Apply one operation to a tree.
///
/// Queries yield `Some(answer)`; updates yield `None`.
pub fn apply(tree: &mut ChthollyTree, op: &Op) -> Result<Option<i64>> {
    match *op {
        Op::Add { lo, hi, x } => {
            tree.add(lo, hi, x)?;
            Ok(None)
        }
        Op::Assign { lo, hi, x } => {
            tree.assign(lo, hi, x)?;
            Ok(None)
        }
        Op::Kth { lo, hi, k } => tree.kth(lo, hi, k).map(Some),
        Op::PowSum { lo, hi, x, y } => tree.powsum(lo, hi, x, y).map(Some),
    }
}
