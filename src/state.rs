use crate::chart::DashboardView;
use crate::config::slider_max;
use crate::data::model::{FilterSelection, LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never modified afterwards.
    pub dataset: LaunchDataset,

    /// Current dropdown + slider values.
    pub selection: FilterSelection,

    /// Charts for `selection` (cached until an input changes).
    pub view: DashboardView,

    /// Payload slider step and upper limit (kg).
    pub slider_step: f64,
    pub slider_max: f64,
}

impl AppState {
    pub fn new(dataset: LaunchDataset, slider_step: f64) -> Self {
        let selection = FilterSelection::initial(&dataset);
        let view = DashboardView::compute(&dataset, &selection);
        let max_payload = dataset.payload_bounds().map(|b| b.max).unwrap_or(0.0);

        Self {
            slider_max: slider_max(max_payload, slider_step),
            slider_step,
            dataset,
            selection,
            view,
        }
    }

    /// Dropdown changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selection.site != site {
            self.selection.site = site;
            self.refresh();
        }
    }

    /// Slider moved. An inverted window is kept as-is and simply matches
    /// nothing.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let range = PayloadRange::new(low, high);
        if self.selection.payload != range {
            self.selection.payload = range;
            self.refresh();
        }
    }

    /// Recompute both charts for the current selection.
    pub fn refresh(&mut self) {
        self.view = DashboardView::compute(&self.dataset, &self.selection);
        log::debug!(
            "selection {:?} [{}, {}] -> {} pie slices, {} scatter rows",
            self.selection.site.label(),
            self.selection.payload.low,
            self.selection.payload.high,
            self.view.pie.slices.len(),
            self.view.scatter.len()
        );
    }
}
