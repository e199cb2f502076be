//! Search tracers.
//!
//! When the caller supplies no explicit target, linear search defaults
//! to the sequence's last element and binary search to the middle
//! element of its own sorted working copy. Every search trace records
//! its outcome twice: a `found`/`not_found` step, then the closing
//! `final` step carrying `{found, index, target}`.

pub mod binary;
pub mod linear;
