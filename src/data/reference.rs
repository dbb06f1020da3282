use super::model::Condition;

// ---------------------------------------------------------------------------
// Sjöström et al. (2001) experimental data
// ---------------------------------------------------------------------------

/// Number of stimulation frequencies in the published dataset
/// (0.1, 10, 20, 40 and 50 Hz).
pub const REFERENCE_LEN: usize = 5;

/// Published mean fractional weight change and its error magnitude for one
/// pairing condition, in frequency order. Fixed experimental constants,
/// never derived from the input file.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSeries {
    pub mean: [f64; REFERENCE_LEN],
    pub error: [f64; REFERENCE_LEN],
}

/// Δt = -10 ms (post-before-pre) condition.
pub const SJOSTROM_NEGATIVE: ReferenceSeries = ReferenceSeries {
    mean: [-0.29, -0.41, -0.34, 0.56, 0.75],
    error: [0.08, 0.11, 0.1, 0.32, 0.19],
};

/// Δt = +10 ms (pre-before-post) condition.
pub const SJOSTROM_POSITIVE: ReferenceSeries = ReferenceSeries {
    mean: [-0.04, 0.14, 0.29, 0.53, 0.56],
    error: [0.05, 0.1, 0.14, 0.11, 0.26],
};

/// The reference series for a given condition.
pub const fn reference_for(condition: Condition) -> ReferenceSeries {
    match condition {
        Condition::Negative => SJOSTROM_NEGATIVE,
        Condition::Positive => SJOSTROM_POSITIVE,
    }
}
