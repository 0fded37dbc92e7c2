use eframe::egui::{self, RichText, Slider, Ui};

use crate::data::model::{ALL_SITES, FilterSelection, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the site dropdown and the payload range slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let mut site = state.selection.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(site.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut site, SiteSelection::All, ALL_SITES);
            for name in state.dataset.sites() {
                ui.selectable_value(&mut site, SiteSelection::Site(name.clone()), name);
            }
        });
    state.set_site(site);

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let max = state.slider_max;
    let step = state.slider_step;
    let mut low = state.selection.payload.low;
    let mut high = state.selection.payload.high;

    ui.add(Slider::new(&mut low, 0.0..=max).step_by(step).text("min"));
    ui.add(Slider::new(&mut high, 0.0..=max).step_by(step).text("max"));
    state.set_payload_range(low, high);

    if low >= high {
        ui.label(RichText::new("Empty payload window").weak());
    }

    ui.add_space(8.0);
    if ui.button("Reset filters").clicked() {
        let initial = FilterSelection::initial(&state.dataset);
        state.set_site(initial.site);
        state.set_payload_range(initial.payload.low, initial.payload.high);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset counters.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.view.scatter.len()
        ));
        if let Some(b) = state.dataset.payload_bounds() {
            ui.separator();
            ui.label(format!("payload {:.0} – {:.0} kg", b.min, b.max));
        }
    });
}
