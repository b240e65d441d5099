/// Length of the first (outermost) segment in millimeters
pub const INITIAL_LENGTH_MM: f64 = 110.0;

/// Number of straight segments making up the arm
pub const SEGMENT_COUNT: usize = 27;

/// Scale factor from one segment to the next
pub const DOWNSCALE_RATIO: f64 = 0.945;

/// Relative tolerance when comparing the iterative sum against the closed form
pub const EPSILON: f64 = 1e-9;
