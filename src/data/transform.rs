// ---------------------------------------------------------------------------
// Fractional weight change
// ---------------------------------------------------------------------------

/// The initial synaptic weight every pairing run starts from.
pub const BASELINE_WEIGHT: f64 = 0.5;

/// Elementwise `(w - 0.5) / 0.5`: the deviation of each end weight from the
/// baseline, as a fraction of that baseline. Pure; invalid input is already
/// rejected by the loader.
pub fn fractional_change(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .map(|&w| (w - BASELINE_WEIGHT) / BASELINE_WEIGHT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points_are_exact() {
        assert_eq!(fractional_change(&[0.5]), vec![0.0]);
        assert_eq!(fractional_change(&[1.0]), vec![1.0]);
        assert_eq!(fractional_change(&[0.0]), vec![-1.0]);
    }

    #[test]
    fn matches_hand_computed_values() {
        assert_eq!(fractional_change(&[0.75, 0.6, 0.4]), vec![0.5, 0.2, -0.2]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(fractional_change(&[]).is_empty());
    }
}
