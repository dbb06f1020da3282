use std::path::PathBuf;

use thiserror::Error;

use super::reference::{reference_for, ReferenceSeries, REFERENCE_LEN};
use super::transform::fractional_change;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong between the file and the plot
// ---------------------------------------------------------------------------

/// Typed failures of the load/partition pipeline. All are fatal; at startup
/// they abort the process, at reload time they are shown in the status line.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{path}: file not found")]
    FileNotFound { path: PathBuf },

    #[error("{path}: empty file, missing header row")]
    HeaderMissing { path: PathBuf },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    DataFormat {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: expected 3 columns, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("no rows with Δt = {sentinel} ms: negative partition is empty")]
    EmptyPartition { sentinel: f64 },

    #[error(
        "partition frequencies disagree at index {index}: \
         Δt=-10 ms has {negative} Hz, Δt=+10 ms has {positive} Hz"
    )]
    FrequencyMismatch {
        index: usize,
        negative: f64,
        positive: f64,
    },

    #[error("partitions have different sizes: {negative} negative rows, {positive} positive rows")]
    PartitionSize { negative: usize, positive: usize },

    #[error("row {row}: {source}")]
    Csv { row: usize, source: csv::Error },

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// WeightDataset – the parsed CSV as parallel columns
// ---------------------------------------------------------------------------

/// The loaded measurement table: three parallel columns of equal length,
/// one entry per CSV data row.
#[derive(Debug, Clone, Default)]
pub struct WeightDataset {
    /// Stimulation frequency in Hz.
    pub frequencies: Vec<f64>,
    /// Spike-timing offset in ms (sign distinguishes the two conditions).
    pub delta_t: Vec<f64>,
    /// End weight as a dimensionless ratio in [0, 1].
    pub raw_weights: Vec<f64>,
}

impl WeightDataset {
    /// Number of measurement rows.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Condition – the two Δt protocols
// ---------------------------------------------------------------------------

/// The two pairing protocols of the Sjöström experiment, distinguished by
/// the sign of the spike-timing offset. Used as an index into all
/// per-condition arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Post-before-pre, Δt = -10 ms.
    Negative = 0,
    /// Pre-before-post, Δt = +10 ms.
    Positive = 1,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Negative, Condition::Positive];

    /// The timing offset this condition stands for, in ms.
    pub fn delta_t_ms(self) -> f64 {
        match self {
            Condition::Negative => -10.0,
            Condition::Positive => 10.0,
        }
    }

    /// Index into per-condition arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// PartitionedWeights – the two-way split by Δt sign
// ---------------------------------------------------------------------------

/// Rows split by Δt sign. The negative partition's frequencies are the
/// canonical x-axis; the positive partition's are kept only for the
/// alignment check.
#[derive(Debug, Clone)]
pub struct PartitionedWeights {
    /// Canonical frequency axis (negative partition, in file order).
    pub frequencies: Vec<f64>,
    /// Frequencies of the positive partition, in file order.
    pub positive_frequencies: Vec<f64>,
    /// Raw weights of the Δt = -10 ms rows.
    pub negative_weights: Vec<f64>,
    /// Raw weights of the remaining rows.
    pub positive_weights: Vec<f64>,
}

// ---------------------------------------------------------------------------
// PlotData – everything the renderer needs
// ---------------------------------------------------------------------------

/// One condition's curves: the transformed model values from the CSV and the
/// published experimental reference it is overlaid against.
#[derive(Debug, Clone)]
pub struct ConditionSeries {
    pub condition: Condition,
    /// Fractional weight change of the simulated end weights.
    pub model: Vec<f64>,
    /// Sjöström (2001) means and errors for this condition.
    pub reference: ReferenceSeries,
}

/// The render-ready product of the pipeline.
#[derive(Debug, Clone)]
pub struct PlotData {
    /// Shared frequency axis in Hz.
    pub frequencies: Vec<f64>,
    /// Per-condition curves, indexed by [`Condition::index`].
    pub series: [ConditionSeries; 2],
}

impl PlotData {
    /// Apply the fractional-change transform to both partitions and attach
    /// the reference constants.
    pub fn from_partitions(parts: &PartitionedWeights) -> Self {
        let series = Condition::ALL.map(|condition| {
            let weights = match condition {
                Condition::Negative => &parts.negative_weights,
                Condition::Positive => &parts.positive_weights,
            };
            ConditionSeries {
                condition,
                model: fractional_change(weights),
                reference: reference_for(condition),
            }
        });

        PlotData {
            frequencies: parts.frequencies.clone(),
            series,
        }
    }

    /// How many points the experimental overlay can draw: the reference
    /// arrays are fixed at [`REFERENCE_LEN`], the frequency axis comes from
    /// the file.
    pub fn overlay_len(&self) -> usize {
        self.frequencies.len().min(REFERENCE_LEN)
    }

    /// Number of points on the frequency axis.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }
}
