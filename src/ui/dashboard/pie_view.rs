use std::f64::consts::{FRAC_PI_2, TAU};

use egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use launchdash::PieChartData;

use crate::ui::{PALETTE_BLACK, category_color};

const SEGMENTS_PER_TURN: f64 = 120.;
const LABEL_RADIUS: f64 = 0.6;
const ANGLE_EPSILON: f64 = 1e-9;

/// Angular extent of one pie category. Slices start at twelve o'clock and run clockwise.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PieSlice {
    pub(crate) label: String,
    pub(crate) count: usize,
    pub(crate) fraction: f64,
    pub(crate) start_angle: f64,
    pub(crate) end_angle: f64,
}

impl PieSlice {
    /// Outline of the slice as wedges of at most a quarter turn each, so every polygon
    /// stays convex.
    pub(crate) fn wedges(&self) -> Vec<Vec<[f64; 2]>> {
        let span = self.end_angle - self.start_angle;
        let wedge_count = (span.abs() / FRAC_PI_2 - ANGLE_EPSILON).ceil().max(1.) as usize;
        let wedge_span = span / wedge_count as f64;

        (0..wedge_count)
            .map(|w| {
                let start = self.start_angle + wedge_span * w as f64;
                let segments =
                    ((wedge_span.abs() / TAU) * SEGMENTS_PER_TURN).ceil().max(1.) as usize;
                std::iter::once([0., 0.])
                    .chain((0..=segments).map(|i| {
                        let angle = start + wedge_span * i as f64 / segments as f64;
                        [angle.cos(), angle.sin()]
                    }))
                    .collect()
            })
            .collect()
    }

    pub(crate) fn label_position(&self) -> PlotPoint {
        let mid = (self.start_angle + self.end_angle) / 2.;
        PlotPoint::new(LABEL_RADIUS * mid.cos(), LABEL_RADIUS * mid.sin())
    }

    pub(crate) fn text(&self) -> String {
        format!("{}\n{:.1}%", self.label, self.fraction * 100.)
    }
}

pub(crate) fn pie_slices(pie: &PieChartData) -> Vec<PieSlice> {
    let total = pie.total();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = FRAC_PI_2;
    pie.iter()
        .map(|(label, count)| {
            let fraction = count as f64 / total as f64;
            let start_angle = angle;
            angle -= fraction * TAU;
            PieSlice {
                label: label.to_string(),
                count,
                fraction,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

pub(crate) fn show_pie(ui: &mut Ui, pie: &PieChartData) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&pie.title).color(Color32::WHITE).strong());
    });

    let slices = pie_slices(pie);
    Plot::new("success_pie")
        .height(320.)
        .data_aspect(1.)
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            if slices.is_empty() {
                plot_ui.text(
                    Text::new("empty", PlotPoint::new(0., 0.), "No launches to chart")
                        .color(Color32::GRAY),
                );
                return;
            }
            for (i, slice) in slices.iter().enumerate() {
                let color = category_color(i, slices.len());
                for wedge in slice.wedges() {
                    plot_ui.polygon(
                        Polygon::new(slice.label.as_str(), PlotPoints::new(wedge))
                            .fill_color(color)
                            .stroke(Stroke::new(1., color)),
                    );
                }
                plot_ui.text(
                    Text::new(slice.label.as_str(), slice.label_position(), slice.text())
                        .color(PALETTE_BLACK),
                );
            }
        });
}
