/// Hidden agent strengths are drawn uniformly from `0..STRENGTH_RANGE`.
pub const STRENGTH_RANGE: i64 = 100;

/// Probability that a match fails outright with a transient error.
pub const FAILURE_PROB: f64 = 0.1;

/// Probability that a match completes but reports a malformed payload.
pub const MALFORMED_PROB: f64 = 0.01;
