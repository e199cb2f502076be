//! Sorting tracers.
//!
//! Shared contract: take the input by borrow, sort an internal working
//! copy, and emit one `initial` step, a `comparison` step for every
//! compared pair (snapshotted before any swap it triggers), a swap step
//! (or `before_swap`/`after_swap` pair) for every exchange, progress
//! `sorted` steps for index ranges now final, and one `final` step with
//! every index sorted. Empty and singleton inputs short-circuit to the
//! degenerate `initial` + `final` trace.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
