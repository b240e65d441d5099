/// Total length of `segment_count` segments, the first `initial_length` long and
/// each subsequent one `downscale_ratio` times the previous.
///
/// Accumulates a running term rather than using the closed form, so
/// `downscale_ratio == 1.0` needs no special case. Zero segments sum to `0.0`.
/// Overflow follows IEEE-754 and surfaces as `inf`.
pub fn compute_total_length(
    initial_length: f64,
    segment_count: usize,
    downscale_ratio: f64,
) -> f64 {
    let mut term = initial_length;
    let mut total = 0.0;
    for _ in 0..segment_count {
        total += term;
        term *= downscale_ratio;
    }
    total
}

/// Closed-form geometric sum: `L * (1 - r^n) / (1 - r)`, or `L * n` when `r == 1`.
/// Used to cross-check [`compute_total_length`]; never the reported value.
pub fn closed_form_total_length(
    initial_length: f64,
    segment_count: usize,
    downscale_ratio: f64,
) -> f64 {
    if downscale_ratio == 1.0 {
        return initial_length * segment_count as f64;
    }
    let exponent = i32::try_from(segment_count).unwrap_or(i32::MAX);
    initial_length * (1.0 - downscale_ratio.powi(exponent)) / (1.0 - downscale_ratio)
}
