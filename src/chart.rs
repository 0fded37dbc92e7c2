//! Presentation adapter: turns filter/aggregate results into chart-ready
//! structures. Nothing here knows about egui widgets; `ui::plot` draws
//! whatever these functions return.

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::filter::{filter_by_payload, outcome_breakdown, success_count_by_site};
use crate::data::model::{FilterSelection, LaunchDataset, Outcome, SiteSelection};

/// Fraction of the pie radius left empty in the middle.
pub const DONUT_HOLE: f64 = 0.3;

/// Marker radius range (points) for the scatter `size` channel.
pub const MIN_MARKER_RADIUS: f32 = 3.0;
pub const MAX_MARKER_RADIUS: f32 = 12.0;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the whole pie, `0.0..=1.0`.
    pub fraction: f64,
    pub color: Color32,
}

/// Angular extent of one slice, in radians, measured counter-clockwise from
/// the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    fn from_counts(title: String, counts: Vec<(String, usize)>, colors: &ColorMap) -> Self {
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        let slices = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| PieSlice {
                color: colors.color_for(&label),
                fraction: count as f64 / total as f64,
                label,
                count,
            })
            .collect();
        PieChart {
            title,
            hole: DONUT_HOLE,
            slices,
        }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slice angles, starting at twelve o'clock and running clockwise.
    pub fn wedges(&self) -> Vec<Wedge> {
        let mut start = FRAC_PI_2;
        self.slices
            .iter()
            .map(|s| {
                let end = start - s.fraction * TAU;
                let w = Wedge { start, end };
                start = end;
                w
            })
            .collect()
    }
}

/// Build the pie for the current site selection.
///
/// * All sites: successful launches per site.
/// * One site: launches of that site split by class (`0` / `1`).
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let counts = success_count_by_site(dataset);
            // Dataset order keeps slice order and colours stable.
            let ordered: Vec<(String, usize)> = dataset
                .sites()
                .iter()
                .filter_map(|s| counts.get(s).map(|&c| (s.clone(), c)))
                .collect();
            PieChart::from_counts(
                "Total Success Launches By all sites".to_string(),
                ordered,
                &ColorMap::new(dataset.sites()),
            )
        }
        SiteSelection::Site(name) => {
            let counts: Vec<(String, usize)> = outcome_breakdown(dataset, name)
                .into_iter()
                .map(|(outcome, count)| (outcome.to_string(), count))
                .collect();
            let classes = [Outcome::Failure, Outcome::Success].map(|o| o.to_string());
            let colors = ColorMap::new(classes);
            PieChart::from_counts(
                format!("Total Success Launches for site {name}"),
                counts,
                &colors,
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// One row of the tabular projection behind the scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRow {
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Outcome class, `0.0` or `1.0`.
    pub y: f64,
    pub radius: f32,
}

/// All points sharing a booster version (one legend entry).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_version: String,
    pub color: Color32,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub rows: Vec<ScatterRow>,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Map a payload onto the marker radius range using the dataset-wide bounds,
/// so marker sizes do not change when the slider narrows the window.
fn marker_radius(dataset: &LaunchDataset, payload_kg: f64) -> f32 {
    let Some(b) = dataset.payload_bounds() else {
        return MIN_MARKER_RADIUS;
    };
    let span = b.max - b.min;
    let t = if span > 0.0 {
        ((payload_kg - b.min) / span).clamp(0.0, 1.0) as f32
    } else {
        0.5
    };
    MIN_MARKER_RADIUS + t * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
}

/// Build the payload-vs-outcome scatter for the full selection.
pub fn scatter_chart(dataset: &LaunchDataset, selection: &FilterSelection) -> ScatterChart {
    let rows = filter_by_payload(
        dataset,
        &selection.site,
        selection.payload.low,
        selection.payload.high,
    );
    let colors = ColorMap::new(dataset.booster_versions());

    let mut grouped: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
    for rec in &rows {
        grouped
            .entry(rec.booster_version.as_str())
            .or_default()
            .push(ScatterPoint {
                x: rec.payload_kg,
                y: f64::from(rec.outcome.class()),
                radius: marker_radius(dataset, rec.payload_kg),
            });
    }

    let series = grouped
        .into_iter()
        .map(|(booster, points)| ScatterSeries {
            booster_version: booster.to_string(),
            color: colors.color_for(booster),
            points,
        })
        .collect();

    let rows = rows
        .into_iter()
        .map(|rec| ScatterRow {
            payload_kg: rec.payload_kg,
            outcome: rec.outcome,
            booster_version: rec.booster_version.clone(),
            site: rec.site.clone(),
        })
        .collect();

    ScatterChart { rows, series }
}

// ---------------------------------------------------------------------------
// Both charts for one selection
// ---------------------------------------------------------------------------

/// Everything the dashboard shows for one [`FilterSelection`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub pie: PieChart,
    pub scatter: ScatterChart,
}

impl DashboardView {
    pub fn compute(dataset: &LaunchDataset, selection: &FilterSelection) -> Self {
        DashboardView {
            pie: pie_chart(dataset, &selection.site),
            scatter: scatter_chart(dataset, selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, PayloadRange};

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("siteA", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("siteA", 2000.0, Outcome::Failure, "v1"),
            LaunchRecord::new("siteB", 1500.0, Outcome::Success, "v2"),
        ])
    }

    fn all_sites(low: f64, high: f64) -> FilterSelection {
        FilterSelection {
            site: SiteSelection::All,
            payload: PayloadRange::new(low, high),
        }
    }

    #[test]
    fn test_all_sites_view() {
        let view = DashboardView::compute(&sample(), &all_sites(0.0, 10_000.0));

        assert_eq!(view.pie.title, "Total Success Launches By all sites");
        let pie: Vec<(&str, usize)> = view
            .pie
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.count))
            .collect();
        assert_eq!(pie, vec![("siteA", 1), ("siteB", 1)]);
        assert_eq!(view.pie.total(), 2);

        assert_eq!(view.scatter.len(), 3);
        let boosters: Vec<&str> = view
            .scatter
            .series
            .iter()
            .map(|s| s.booster_version.as_str())
            .collect();
        assert_eq!(boosters, vec!["v1", "v2"]);
    }

    #[test]
    fn test_single_site_pie_uses_class_labels() {
        let pie = pie_chart(&sample(), &SiteSelection::Site("siteA".into()));
        assert_eq!(pie.title, "Total Success Launches for site siteA");
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1"]);
        assert!((pie.slices[0].fraction - 0.5).abs() < 1e-12);
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn test_unknown_site_gives_empty_charts() {
        let sel = FilterSelection {
            site: SiteSelection::Site("nowhere".into()),
            payload: PayloadRange::new(0.0, 10_000.0),
        };
        let view = DashboardView::compute(&sample(), &sel);
        assert!(view.pie.is_empty());
        assert!(view.scatter.is_empty());
        assert!(view.scatter.series.is_empty());
    }

    #[test]
    fn test_wedges_cover_full_circle() {
        let pie = pie_chart(&sample(), &SiteSelection::All);
        let wedges = pie.wedges();
        assert_eq!(wedges.len(), 2);
        assert!((wedges[0].start - FRAC_PI_2).abs() < 1e-12);
        let swept = wedges[0].start - wedges[1].end;
        assert!((swept - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_marker_radius_scales_with_payload() {
        let ds = sample();
        let view = scatter_chart(&ds, &all_sites(0.0, 10_000.0));
        let v1 = &view.series[0].points;
        assert_eq!(v1[0].radius, MIN_MARKER_RADIUS);
        assert_eq!(v1[1].radius, MAX_MARKER_RADIUS);
        assert_eq!(v1[1].y, 0.0);
    }
}
