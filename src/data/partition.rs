use super::model::{DataError, PartitionedWeights, WeightDataset};

// ---------------------------------------------------------------------------
// Partition by Δt sign
// ---------------------------------------------------------------------------

/// Sentinel marking the post-before-pre rows. The producer writes the offset
/// verbatim, so the comparison is exact.
pub const NEGATIVE_DELTA_T_MS: f64 = -10.0;

/// Split rows into the negative (Δt = -10 ms) and positive partitions.
///
/// Every row lands in exactly one partition, in file order. An empty
/// negative partition leaves the viewer without an x-axis and is rejected.
pub fn split(dataset: &WeightDataset) -> Result<PartitionedWeights, DataError> {
    let mut parts = PartitionedWeights {
        frequencies: Vec::new(),
        positive_frequencies: Vec::new(),
        negative_weights: Vec::new(),
        positive_weights: Vec::new(),
    };

    for ((&freq, &dt), &w) in dataset
        .frequencies
        .iter()
        .zip(&dataset.delta_t)
        .zip(&dataset.raw_weights)
    {
        if dt == NEGATIVE_DELTA_T_MS {
            parts.frequencies.push(freq);
            parts.negative_weights.push(w);
        } else {
            parts.positive_frequencies.push(freq);
            parts.positive_weights.push(w);
        }
    }

    if parts.frequencies.is_empty() {
        return Err(DataError::EmptyPartition {
            sentinel: NEGATIVE_DELTA_T_MS,
        });
    }

    Ok(parts)
}

/// Check that the positive partition runs over the same frequencies, in the
/// same order, as the negative one. The overlay zips both partitions against
/// the single canonical axis; a disagreement here would silently plot the
/// positive curve at the wrong frequencies.
pub fn ensure_aligned(parts: &PartitionedWeights) -> Result<(), DataError> {
    if parts.frequencies.len() != parts.positive_frequencies.len() {
        return Err(DataError::PartitionSize {
            negative: parts.frequencies.len(),
            positive: parts.positive_frequencies.len(),
        });
    }

    for (index, (&neg, &pos)) in parts
        .frequencies
        .iter()
        .zip(&parts.positive_frequencies)
        .enumerate()
    {
        if neg != pos {
            return Err(DataError::FrequencyMismatch {
                index,
                negative: neg,
                positive: pos,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(f64, f64, f64)]) -> WeightDataset {
        let mut ds = WeightDataset::default();
        for &(freq, dt, w) in rows {
            ds.frequencies.push(freq);
            ds.delta_t.push(dt);
            ds.raw_weights.push(w);
        }
        ds
    }

    #[test]
    fn split_is_total_and_disjoint() {
        let ds = dataset(&[
            (0.1, -10.0, 0.4),
            (0.1, 10.0, 0.5),
            (10.0, -10.0, 0.3),
            (10.0, 10.0, 0.6),
            (20.0, -10.0, 0.35),
        ]);
        let parts = split(&ds).expect("split");
        assert_eq!(
            parts.negative_weights.len() + parts.positive_weights.len(),
            ds.len()
        );
        assert_eq!(parts.frequencies, vec![0.1, 10.0, 20.0]);
        assert_eq!(parts.positive_frequencies, vec![0.1, 10.0]);
    }

    #[test]
    fn scenario_from_known_rows() {
        let ds = dataset(&[(1.0, -10.0, 0.75), (2.0, -10.0, 0.6), (1.0, 10.0, 0.4)]);
        let parts = split(&ds).expect("split");
        assert_eq!(parts.frequencies, vec![1.0, 2.0]);
        assert_eq!(parts.negative_weights, vec![0.75, 0.6]);
        assert_eq!(parts.positive_weights, vec![0.4]);
    }

    #[test]
    fn missing_sentinel_rows_fail_fast() {
        let ds = dataset(&[(1.0, 10.0, 0.4), (2.0, 10.0, 0.5)]);
        assert!(matches!(
            split(&ds).unwrap_err(),
            DataError::EmptyPartition { .. }
        ));
    }

    #[test]
    fn aligned_partitions_pass_the_check() {
        let ds = dataset(&[
            (1.0, -10.0, 0.75),
            (2.0, -10.0, 0.6),
            (1.0, 10.0, 0.4),
            (2.0, 10.0, 0.5),
        ]);
        let parts = split(&ds).expect("split");
        assert!(ensure_aligned(&parts).is_ok());
    }

    #[test]
    fn size_disagreement_is_rejected() {
        let ds = dataset(&[(1.0, -10.0, 0.75), (2.0, -10.0, 0.6), (1.0, 10.0, 0.4)]);
        let parts = split(&ds).expect("split");
        assert!(matches!(
            ensure_aligned(&parts).unwrap_err(),
            DataError::PartitionSize {
                negative: 2,
                positive: 1
            }
        ));
    }

    #[test]
    fn frequency_disagreement_names_the_index() {
        let ds = dataset(&[
            (1.0, -10.0, 0.75),
            (2.0, -10.0, 0.6),
            (1.0, 10.0, 0.4),
            (3.0, 10.0, 0.5),
        ]);
        let parts = split(&ds).expect("split");
        match ensure_aligned(&parts).unwrap_err() {
            DataError::FrequencyMismatch {
                index,
                negative,
                positive,
            } => {
                assert_eq!(index, 1);
                assert_eq!(negative, 2.0);
                assert_eq!(positive, 3.0);
            }
            other => panic!("expected FrequencyMismatch, got {other:?}"),
        }
    }
}
