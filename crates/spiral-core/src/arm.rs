use serde::{Deserialize, Serialize};

use crate::accumulate::{closed_form_total_length, compute_total_length};
use crate::constants::{DOWNSCALE_RATIO, INITIAL_LENGTH_MM, SEGMENT_COUNT};
use crate::sequence::SegmentSequence;

/// Geometry of one spiral arm: first segment length (mm), segment count, and
/// the ratio between consecutive segments.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpiralArm {
    pub initial_length: f64,
    pub segment_count: usize,
    pub downscale_ratio: f64,
}

impl SpiralArm {
    pub fn new(initial_length: f64, segment_count: usize, downscale_ratio: f64) -> Self {
        Self {
            initial_length,
            segment_count,
            downscale_ratio,
        }
    }

    pub fn segments(&self) -> SegmentSequence {
        SegmentSequence::generate(self.initial_length, self.segment_count, self.downscale_ratio)
    }

    /// Total arm length in millimeters.
    pub fn total_length(&self) -> f64 {
        compute_total_length(self.initial_length, self.segment_count, self.downscale_ratio)
    }

    pub fn closed_form_length(&self) -> f64 {
        closed_form_total_length(self.initial_length, self.segment_count, self.downscale_ratio)
    }

    /// True when every segment is strictly shorter than the one before it.
    pub fn is_tapering(&self) -> bool {
        self.downscale_ratio > 0.0 && self.downscale_ratio < 1.0
    }
}

impl Default for SpiralArm {
    fn default() -> Self {
        Self::new(INITIAL_LENGTH_MM, SEGMENT_COUNT, DOWNSCALE_RATIO)
    }
}
