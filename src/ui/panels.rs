use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::Condition;
use crate::state::AppState;
use crate::style::{self, SeriesKind};

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left panel: layer and condition toggles.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    ui.strong("Layers");
    ui.checkbox(
        &mut state.show_experimental,
        RichText::new("Experimental data").color(style::series_color(SeriesKind::Experimental)),
    );
    ui.checkbox(
        &mut state.show_model,
        RichText::new("Triplet rule").color(style::series_color(SeriesKind::Model)),
    );

    ui.separator();
    ui.strong("Conditions");
    for condition in Condition::ALL {
        let label = format!("Δt = {:+} ms", condition.delta_t_ms());
        ui.checkbox(&mut state.show_condition[condition.index()], label);
    }

    ui.separator();
    ui.label(format!("{} frequencies per condition", state.plot.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} – {} frequencies, Δt ∈ {{-10, +10}} ms",
            state.input_path.display(),
            state.plot.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
