use eframe::egui::Color32;
use egui_plot::LineStyle;

use crate::data::model::Condition;

// ---------------------------------------------------------------------------
// Series styling: colours, dash patterns, legend labels
// ---------------------------------------------------------------------------

/// The two layers drawn per condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Published measurements with error bars.
    Experimental,
    /// Transformed weights from the simulation.
    Model,
}

/// Experimental curves are black, as in the published figure.
pub const EXPERIMENTAL_COLOR: Color32 = Color32::BLACK;

/// Model curves are blue.
pub const MODEL_COLOR: Color32 = Color32::BLUE;

/// Dash pattern per condition: Δt = -10 ms dashed, Δt = +10 ms solid.
/// Both layers of a condition share it.
pub fn line_style(condition: Condition) -> LineStyle {
    match condition {
        Condition::Negative => LineStyle::Dashed { length: 10.0 },
        Condition::Positive => LineStyle::Solid,
    }
}

/// Colour of a layer, independent of condition.
pub fn series_color(kind: SeriesKind) -> Color32 {
    match kind {
        SeriesKind::Experimental => EXPERIMENTAL_COLOR,
        SeriesKind::Model => MODEL_COLOR,
    }
}

/// Legend entry for one curve, e.g. `Triplet rule (Δt = +10 ms)`.
pub fn series_name(kind: SeriesKind, condition: Condition) -> String {
    let layer = match kind {
        SeriesKind::Experimental => "Experimental data",
        SeriesKind::Model => "Triplet rule",
    };
    format!("{layer} (Δt = {:+} ms)", condition.delta_t_ms())
}
