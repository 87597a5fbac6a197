//! Engine-level scenario benchmarks.
//!
//! These model the real render path: a busy voice pool, and the driver
//! turning blocks into PCM.

mod output;
mod voices;

pub use output::bench_output;
pub use voices::bench_voices;
