use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + counters ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: site dropdown + payload slider ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: rows behind the scatter ----
        egui::TopBottomPanel::bottom("launch_table")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::launch_table(ui, &self.state.view.scatter);
            });

        // ---- Central panel: pie | scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = &self.state.view;
            ui.columns(2, |cols| {
                plot::success_pie(&mut cols[0], &view.pie);
                plot::payload_scatter(&mut cols[1], &view.scatter);
            });
        });
    }
}
