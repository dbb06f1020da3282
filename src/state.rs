use std::path::PathBuf;

use crate::data;
use crate::data::model::{Condition, PlotData};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The plot data is always
/// present: the pipeline runs before the window opens, and a failed reload
/// keeps the previous data on screen.
pub struct AppState {
    /// Where the measurements came from (reload re-reads this path).
    pub input_path: PathBuf,

    /// The curves currently on screen.
    pub plot: PlotData,

    /// Show the error-barred experimental layer.
    pub show_experimental: bool,

    /// Show the model layer.
    pub show_model: bool,

    /// Per-condition visibility, indexed by [`Condition::index`].
    pub show_condition: [bool; 2],

    /// Error message from the last failed reload, shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(input_path: PathBuf, plot: PlotData) -> Self {
        Self {
            input_path,
            plot,
            show_experimental: true,
            show_model: true,
            show_condition: [true; 2],
            status_message: None,
        }
    }

    /// Re-run the pipeline on the input file. On failure the current plot
    /// stays in place and the error goes to the status line.
    pub fn reload(&mut self) {
        match data::load_plot_data(&self.input_path) {
            Ok(plot) => {
                self.plot = plot;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("reload of {} failed: {e}", self.input_path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Whether a condition's curves are visible.
    pub fn condition_visible(&self, condition: Condition) -> bool {
        self.show_condition[condition.index()]
    }
}
