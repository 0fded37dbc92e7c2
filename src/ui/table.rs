use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::ScatterChart;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Launch table (tabular projection behind the scatter)
// ---------------------------------------------------------------------------

/// Render the filtered launches as a table: payload, class, booster, site.
pub fn launch_table(ui: &mut Ui, scatter: &ScatterChart) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["Payload Mass (kg)", "class", "Booster Version", "Launch Site"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, scatter.rows.len(), |mut row| {
                let rec = &scatter.rows[row.index()];
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_kg));
                });
                row.col(|ui| {
                    let text = RichText::new(rec.outcome.to_string());
                    ui.label(if rec.outcome.is_success() { text.strong() } else { text.weak() });
                });
                row.col(|ui| {
                    ui.label(&rec.booster_version);
                });
                row.col(|ui| {
                    ui.label(&rec.site);
                });
            });
        });
}
