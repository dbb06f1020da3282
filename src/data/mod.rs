/// Data layer: core types, loading, partitioning, and the weight transform.
///
/// Architecture:
/// ```text
///      weights.csv
///           │
///           ▼
///     ┌──────────┐
///     │  loader   │  parse file → WeightDataset
///     └──────────┘
///           │
///           ▼
///     ┌───────────┐
///     │ partition  │  split by Δt sign → PartitionedWeights
///     └───────────┘
///           │
///           ▼
///     ┌───────────┐
///     │ transform  │  (w - 0.5) / 0.5 → PlotData
///     └───────────┘
/// ```
pub mod loader;
pub mod model;
pub mod partition;
pub mod reference;
pub mod transform;

use std::path::Path;

use model::{DataError, PlotData};

/// Run the whole pipeline short of rendering: load, partition, check
/// alignment, transform. Pure with respect to the UI, so it is callable from
/// tests and from the reload action alike.
pub fn load_plot_data(path: &Path) -> Result<PlotData, DataError> {
    let dataset = loader::load_csv(path)?;
    let parts = partition::split(&dataset)?;
    partition::ensure_aligned(&parts)?;

    log::info!(
        "loaded {} rows from {} ({} frequencies per condition)",
        dataset.len(),
        path.display(),
        parts.frequencies.len()
    );
    if parts.frequencies.len() != reference::REFERENCE_LEN {
        log::warn!(
            "{} frequencies in the file but {} reference points; \
             the experimental overlay is truncated to the shorter",
            parts.frequencies.len(),
            reference::REFERENCE_LEN
        );
    }

    Ok(PlotData::from_partitions(&parts))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::model::Condition;
    use super::*;

    #[test]
    fn pipeline_end_to_end() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("weights.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        file.write_all(
            b"frequency,delta_t,weight\n\
              1.0,-10.0,0.75\n\
              2.0,-10.0,0.6\n\
              1.0,10.0,0.4\n\
              2.0,10.0,0.5\n",
        )
        .expect("write csv");

        let plot = load_plot_data(&path).expect("pipeline");
        assert_eq!(plot.frequencies, vec![1.0, 2.0]);
        assert_eq!(
            plot.series[Condition::Negative.index()].model,
            vec![0.5, 0.2]
        );
        assert_eq!(
            plot.series[Condition::Positive.index()].model,
            vec![-0.2, 0.0]
        );
    }

    #[test]
    fn pipeline_stops_at_the_loader_on_a_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_plot_data(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }
}
