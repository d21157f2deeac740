//! # Chtholly Tree (ODT)
//!
//! *Range assignment as a compression primitive.*
//!
//! ## Intuition First
//!
//! Imagine a long shelf of books where whole stretches keep getting repainted
//! in a single color. Instead of tracking every book, you only track the
//! *stretches*: "books 0..=499 are red, 500..=520 are blue, ...". Most range
//! questions ("what is the 3rd cheapest book between 100 and 900?") can then
//! be answered by looking at a handful of stretches instead of hundreds of
//! books.
//!
//! The Chtholly tree (also "ODT", *old driver tree*) is exactly that: an
//! ordered collection of maximal same-value runs covering `[0, n)`. Every
//! range operation first *splits* the two boundary runs so the target range
//! becomes an exact union of runs, then walks only those runs.
//!
//! ## The Problem
//!
//! Classic range structures trade generality for speed:
//! - **Segment trees**: fast for composable aggregates, awkward for
//!   "k-th smallest" or "sum of x-th powers mod y".
//! - **Plain arrays**: trivially general but $O(r - l)$ for everything.
//!
//! When the workload contains range *assignments*, assignment destroys
//! information: after `assign(l, r, v)` the whole range is one run. The
//! Chtholly tree leans on that — each assign collapses every run it touches
//! into one, so the run count keeps shrinking back down no matter how many
//! splits the other operations add.
//!
//! ## Historical Context
//!
//! ```text
//! 2017  lxl       Codeforces 896C "Willem, Chtholly and Seniorious":
//!                 the structure and its assign-heavy random workload
//! 2017+ folklore  "ODT" spreads through competitive programming as the
//!                 pragmatic answer to non-composable range queries
//! ```
//!
//! ## Mathematical Formulation
//!
//! The state is a partition of `[0, n)` into runs `(start, end, value)`,
//! totally ordered by `start`. `split(pos)` refines the partition so that
//! some run starts at `pos`; `assign` coarsens it back. Under uniformly
//! random operations where a constant fraction are assigns, the expected
//! run count stays $O(\log n)$, so the expected cost of walking a range is
//! logarithmic even though the worst case is linear.
//!
//! ## Complexity Analysis
//!
//! - **Split**: $O(\log n)$ (one ordered-map lookup plus $O(1)$ edits).
//! - **Range ops**: $O((k + 1) \log n)$ where $k$ is the number of runs in
//!   the range — amortized small under assign-heavy workloads, $O(n)$ worst
//!   case when no assigns ever happen.
//! - **Space**: one map entry per run.
//!
//! ## What Could Go Wrong
//!
//! 1. **Adversarial workloads**: without range assigns the run count grows
//!    toward `n` and every operation degrades to a linear scan. This
//!    structure is a bet on the workload, not a worst-case guarantee.
//! 2. **Split order**: a range operation must split the upper bound before
//!    the lower one; see [`tree`] for the discipline.
//! 3. **Overflow in the hot loop**: `powsum` multiplies values that may sit
//!    anywhere in `i64`; [`modmath`] keeps every product inside the type.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`ChthollyTree`]**: the run partition with `add`, `assign`, `kth`,
//!   and `powsum` over arbitrary sub-ranges.
//! - **[`modmath`]**: overflow-safe modular multiplication and fast
//!   exponentiation used by the power-sum query.
//! - **[`opgen`]**: the classic deterministic demo workload as a pluggable
//!   operation stream.
//!
//! ## References
//!
//! - Codeforces 896C, "Willem, Chtholly and Seniorious" (2017).
//! - The folklore `std::set`-of-runs formulation with a `mutable` value
//!   field; here a `BTreeMap` keyed by run start plays that role.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod modmath;
pub mod opgen;
pub mod tree;

pub use error::Error;
pub use tree::ChthollyTree;
