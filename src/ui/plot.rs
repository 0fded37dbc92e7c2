use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, Points, Polygon, Text};

use crate::chart::{PieChart, ScatterChart, Wedge};

/// Ring segments per full turn; each wedge is filled as convex quads.
const SEGMENTS_PER_TURN: f64 = 180.0;

// ---------------------------------------------------------------------------
// Success pie
// ---------------------------------------------------------------------------

/// Split a donut wedge into convex quads between radius `inner` and `1.0`.
fn wedge_quads(wedge: &Wedge, inner: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = wedge.start - wedge.end;
    let turns = sweep / std::f64::consts::TAU;
    // Tolerance keeps float noise from adding a sliver quad.
    let steps = (turns * SEGMENTS_PER_TURN - 1e-9).ceil().max(1.0) as usize;
    let angle = |k: usize| wedge.start - sweep * k as f64 / steps as f64;

    (0..steps)
        .map(|k| {
            let (a0, a1) = (angle(k), angle(k + 1));
            vec![
                [inner * a0.cos(), inner * a0.sin()],
                [a0.cos(), a0.sin()],
                [a1.cos(), a1.sin()],
                [inner * a1.cos(), inner * a1.sin()],
            ]
        })
        .collect()
}

/// Render the success-count donut.
pub fn success_pie(ui: &mut Ui, pie: &PieChart) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(pie.title.as_str());
        ui.label(RichText::new(format!("({} launches)", pie.total())).weak());
    });

    if pie.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection");
        });
        return;
    }

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            for (slice, wedge) in pie.slices.iter().zip(pie.wedges()) {
                let name = format!("{} ({})", slice.label, slice.count);
                for quad in wedge_quads(&wedge, pie.hole) {
                    plot_ui.polygon(
                        Polygon::new(quad)
                            .fill_color(slice.color)
                            .stroke(Stroke::new(0.5, slice.color))
                            .name(&name),
                    );
                }

                let r = (1.0 + pie.hole) / 2.0;
                let mid = wedge.mid();
                plot_ui.text(Text::new(
                    PlotPoint::new(r * mid.cos(), r * mid.sin()),
                    RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                        .color(Color32::WHITE)
                        .strong(),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter, coloured by booster version and sized
/// by payload.
pub fn payload_scatter(ui: &mut Ui, scatter: &ScatterChart) {
    ui.strong("Correlation between Payload and Success");

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(0.0)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            format!(
                "{name}\nPayload Mass (kg)={:.0}\nclass={:.0}",
                value.x, value.y
            )
        })
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                // One item per point so each marker keeps its own size; the
                // shared name folds them into a single legend entry.
                for p in &series.points {
                    plot_ui.points(
                        Points::new(vec![[p.x, p.y]])
                            .color(series.color)
                            .radius(p.radius)
                            .filled(true)
                            .name(&series.booster_version),
                    );
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_half_wedge_quads_stay_on_ring() {
        let wedge = Wedge {
            start: FRAC_PI_2,
            end: FRAC_PI_2 - PI,
        };
        let quads = wedge_quads(&wedge, 0.3);
        assert_eq!(quads.len(), 90);
        for quad in &quads {
            let r_inner = (quad[0][0].powi(2) + quad[0][1].powi(2)).sqrt();
            let r_outer = (quad[1][0].powi(2) + quad[1][1].powi(2)).sqrt();
            assert!((r_inner - 0.3).abs() < 1e-9);
            assert!((r_outer - 1.0).abs() < 1e-9);
        }
        // Clockwise from twelve o'clock: the half ends at six o'clock.
        let last = quads.last().unwrap();
        assert!(last[2][0].abs() < 1e-9);
        assert!((last[2][1] + 1.0).abs() < 1e-9);
    }
}
