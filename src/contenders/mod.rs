//! Built-in contenders.
//!
//! Real algorithm adapters are thin shims over external libraries; the two
//! families here exist so the harness is usable out of the box: a
//! zero-dependency ordinal-rank baseline and an adapter for the `ph`
//! crate's fingerprint-based MPHFs.

pub mod fmph;
pub mod rank;
