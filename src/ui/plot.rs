use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::Condition;
use crate::state::AppState;
use crate::style::{self, SeriesKind};

// ---------------------------------------------------------------------------
// Weight-change plot (central panel)
// ---------------------------------------------------------------------------

/// Render the frequency-response chart in the central panel: per condition,
/// an error-barred experimental curve and a model curve sharing the same
/// dash pattern.
pub fn weight_plot(ui: &mut Ui, state: &AppState) {
    let data = &state.plot;

    Plot::new("weight_plot")
        .legend(Legend::default())
        .x_axis_label("Frequency/Hz")
        .y_axis_label("Δw / w")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for condition in Condition::ALL {
                if !state.condition_visible(condition) {
                    continue;
                }
                let series = &data.series[condition.index()];
                let dash = style::line_style(series.condition);

                if state.show_experimental {
                    let n = data.overlay_len();

                    let points: PlotPoints = data.frequencies[..n]
                        .iter()
                        .zip(&series.reference.mean[..n])
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(style::series_name(SeriesKind::Experimental, condition))
                            .color(style::EXPERIMENTAL_COLOR)
                            .style(dash)
                            .width(1.5),
                    );

                    // Error bars as vertical segments; unnamed lines stay
                    // out of the legend.
                    for i in 0..n {
                        let x = data.frequencies[i];
                        let mean = series.reference.mean[i];
                        let err = series.reference.error[i];
                        let bar: PlotPoints = vec![[x, mean - err], [x, mean + err]].into();
                        plot_ui.line(
                            Line::new(bar)
                                .color(style::EXPERIMENTAL_COLOR)
                                .width(1.0),
                        );
                    }
                }

                if state.show_model {
                    let points: PlotPoints = data
                        .frequencies
                        .iter()
                        .zip(&series.model)
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(style::series_name(SeriesKind::Model, condition))
                            .color(style::MODEL_COLOR)
                            .style(dash)
                            .width(1.5),
                    );
                }
            }
        });
}
