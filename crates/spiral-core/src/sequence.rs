use serde::Serialize;

/// Ordered segment lengths of a spiral arm, outermost first.
///
/// Element 0 is the initial length and every following element is the previous
/// one multiplied by the downscale ratio. Built in full by [`generate`] and
/// read-only afterwards.
///
/// [`generate`]: SegmentSequence::generate
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SegmentSequence {
    segments: Vec<f64>,
}

impl SegmentSequence {
    /// Generate `segment_count` lengths starting at `initial_length`.
    pub fn generate(initial_length: f64, segment_count: usize, downscale_ratio: f64) -> Self {
        let mut segments = Vec::with_capacity(segment_count);
        let mut term = initial_length;
        for _ in 0..segment_count {
            segments.push(term);
            term *= downscale_ratio;
        }
        Self { segments }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Outermost segment.
    pub fn first(&self) -> Option<f64> {
        self.segments.first().copied()
    }

    /// Innermost segment.
    pub fn last(&self) -> Option<f64> {
        self.segments.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().copied()
    }

    /// Sum of all segment lengths, left to right from `0.0`.
    /// Bitwise equal to [`crate::compute_total_length`] over the same inputs.
    pub fn total(&self) -> f64 {
        self.segments.iter().fold(0.0, |acc, len| acc + len)
    }
}
