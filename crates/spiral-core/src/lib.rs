//! Spiral arm segment geometry.
//!
//! Models a spiral arm as a finite run of straight segments, each one shorter
//! than the last by a fixed downscale ratio. The total arm length is the sum of
//! that geometric sequence.
//!
//! Zero I/O — pure math with no opinions about how the result is reported.

pub mod accumulate;
pub mod arm;
pub mod constants;
pub mod sequence;

pub use accumulate::{closed_form_total_length, compute_total_length};
pub use arm::SpiralArm;
pub use constants::{DOWNSCALE_RATIO, EPSILON, INITIAL_LENGTH_MM, SEGMENT_COUNT};
pub use sequence::SegmentSequence;
