//! The run partition and its range operations.
//!
//! # Representation
//!
//! The sole state is a `BTreeMap<usize, Run>` keyed by run start. Keys are
//! unique and ascending, runs never overlap, and together they cover
//! `[0, n)` exactly with no gaps. A run's `value` (and, during a split, its
//! `end`) is mutable without touching the key, which is what the classic
//! `std::set`-with-`mutable`-field formulation needed a keyword for.
//!
//! # Split discipline
//!
//! Every range operation isolates `[l, r]` by splitting at `r + 1` first
//! and at `l` second. Splitting the lower bound first could subdivide the
//! very run the upper split still needs to locate, so the upper boundary is
//! always established before the lower one.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::modmath;

/// A maximal same-value run. Its start index is the map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    /// Inclusive end index; `end >= start` always.
    end: usize,
    /// The value shared by every position in the run.
    value: i64,
}

/// An interval-compressed ordered sequence (Chtholly tree / ODT).
///
/// Represents a sequence of `n` signed integers as maximal same-value runs
/// and supports additive update, range assignment, order-statistic query,
/// and modular power-sum aggregation over arbitrary sub-ranges.
///
/// Range arguments are 0-indexed and inclusive on both ends. All range
/// operations validate their arguments before mutating anything, so a
/// returned error implies the structure is unchanged.
///
/// # Examples
///
/// ```rust
/// use chtholly::ChthollyTree;
///
/// let mut t = ChthollyTree::new(&[1, 2, 3, 4, 5]);
/// t.add(0, 4, 10).unwrap();
/// t.assign(1, 3, 7).unwrap();
/// assert_eq!(t.kth(0, 4, 3).unwrap(), 7); // sorted: 7, 7, 7, 11, 15
/// ```
#[derive(Clone, Default)]
pub struct ChthollyTree {
    runs: BTreeMap<usize, Run>,
    len: usize,
}

impl std::fmt::Debug for ChthollyTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChthollyTree")
            .field("len", &self.len)
            .field("runs", &self.runs.len())
            .finish()
    }
}

impl ChthollyTree {
    /// Build a tree from an initial sequence.
    ///
    /// Each position becomes a singleton run `[i, i]`; adjacent equal
    /// values are left un-merged, since assigns coalesce them on demand.
    pub fn new(values: &[i64]) -> Self {
        let runs = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i, Run { end: i, value: v }))
            .collect();
        Self {
            runs,
            len: values.len(),
        }
    }

    /// Return the length of the represented sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the sequence has length 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the current number of runs in the partition.
    ///
    /// Bounded by `len()`; range assigns keep it small on assign-heavy
    /// workloads.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Iterate over `(start, end, value)` triples in ascending order.
    pub fn runs(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.runs.iter().map(|(&start, run)| (start, run.end, run.value))
    }

    /// Return the value at index `i`.
    ///
    /// Read-only: locates the covering run without splitting it.
    pub fn get(&self, i: usize) -> Result<i64> {
        if i >= self.len {
            return Err(Error::IndexOutOfBounds(i));
        }
        self.runs
            .range(..=i)
            .next_back()
            .map(|(_, run)| run.value)
            .ok_or(Error::IndexOutOfBounds(i))
    }

    /// Ensure a run starts at `pos`, subdividing the covering run if needed.
    ///
    /// Boundary positions are no-ops: `pos == 0` (a run already starts
    /// there) and `pos >= len` (past the covered range). Total coverage and
    /// all values are unchanged in every case.
    fn split(&mut self, pos: usize) {
        if pos == 0 || pos >= self.len {
            return;
        }
        let (start, run) = match self.runs.range(..=pos).next_back() {
            Some((&start, run)) => (start, *run),
            None => return,
        };
        if start == pos {
            return;
        }
        // pos is strictly inside [start, end]: cut it in two.
        self.runs.insert(
            start,
            Run {
                end: pos - 1,
                value: run.value,
            },
        );
        self.runs.insert(
            pos,
            Run {
                end: run.end,
                value: run.value,
            },
        );
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<()> {
        if lo > hi || hi >= self.len {
            return Err(Error::InvalidRange {
                lo,
                hi,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Add `x` to every value in `[lo, hi]` (inclusive).
    pub fn add(&mut self, lo: usize, hi: usize, x: i64) -> Result<()> {
        self.check_range(lo, hi)?;
        self.split(hi + 1);
        self.split(lo);
        for (_, run) in self.runs.range_mut(lo..=hi) {
            run.value += x;
        }
        Ok(())
    }

    /// Assign `x` to every value in `[lo, hi]` (inclusive).
    ///
    /// Every run overlapping the range is removed and replaced by the
    /// single run `[lo, hi]`. This is the one operation that shrinks the
    /// run count, and the reason the structure stays small on assign-heavy
    /// workloads.
    pub fn assign(&mut self, lo: usize, hi: usize, x: i64) -> Result<()> {
        self.check_range(lo, hi)?;
        self.split(hi + 1);
        self.split(lo);
        let stale: Vec<usize> = self.runs.range(lo..=hi).map(|(&s, _)| s).collect();
        for start in stale {
            self.runs.remove(&start);
        }
        self.runs.insert(lo, Run { end: hi, value: x });
        Ok(())
    }

    /// Return the `k`-th smallest value in `[lo, hi]` (`k` is 1-based).
    ///
    /// Collects `(value, length)` pairs for the runs in the range, sorts by
    /// value, and walks cumulative lengths. A rank of 0 or one exceeding
    /// the sub-range length is [`Error::RankOutOfRange`].
    pub fn kth(&mut self, lo: usize, hi: usize, k: usize) -> Result<i64> {
        self.check_range(lo, hi)?;
        if k == 0 {
            return Err(Error::RankOutOfRange(k));
        }
        self.split(hi + 1);
        self.split(lo);

        let mut pairs: Vec<(i64, usize)> = self
            .runs
            .range(lo..=hi)
            .map(|(&start, run)| (run.value, run.end - start + 1))
            .collect();
        pairs.sort_unstable_by_key(|&(value, _)| value);

        let mut remaining = k;
        for (value, count) in pairs {
            if remaining <= count {
                return Ok(value);
            }
            remaining -= count;
        }
        Err(Error::RankOutOfRange(k))
    }

    /// Compute `sum over i in [lo, hi] of value[i]^x`, reduced mod `y`.
    ///
    /// Each run contributes `(length mod y) * (value^x mod y)`. Requires
    /// `y > 0`; values may be negative or exceed `y` and are normalized
    /// into `[0, y)` before exponentiation.
    pub fn powsum(&mut self, lo: usize, hi: usize, x: u64, y: i64) -> Result<i64> {
        self.check_range(lo, hi)?;
        if y <= 0 {
            return Err(Error::InvalidModulus(y));
        }
        self.split(hi + 1);
        self.split(lo);

        let mut acc = 0i64;
        for (&start, run) in self.runs.range(lo..=hi) {
            let count = ((run.end - start + 1) as i64) % y;
            let power = modmath::pow_mod(run.value, x, y);
            acc = (acc + modmath::mul_mod(count, power, y)) % y;
        }
        Ok(acc)
    }
}
