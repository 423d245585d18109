use egui::{Color32, Pos2, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{
    GridMark, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, PlotTransform, Points, Text,
};

use launchdash::{ScatterData, ScatterPoint};

use crate::ui::category_color;

const HOVER_DISTANCE_PX: f32 = 10.;
const POINT_RADIUS: f32 = 5.;

fn outcome_tick(mark: GridMark) -> String {
    if mark.value == 0. {
        "Failure (0)".to_string()
    } else if mark.value == 1. {
        "Success (1)".to_string()
    } else {
        String::new()
    }
}

/// Index of the point closest to `pointer`, if any lies within the hover distance.
pub(crate) fn nearest_point(
    points: &[ScatterPoint],
    pointer: Pos2,
    transform: &PlotTransform,
) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let screen = transform.position_from_point(&PlotPoint::new(p.x(), p.y()));
            (i, screen.distance(pointer))
        })
        .filter(|(_, distance)| *distance <= HOVER_DISTANCE_PX)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Draws the payload/outcome scatter and returns the index of the hovered point.
pub(crate) fn show_scatter(ui: &mut Ui, scatter: &ScatterData) -> Option<usize> {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(scatter.title()).color(Color32::WHITE).strong());
    });

    let groups = scatter.by_booster_category();
    let plot_response = Plot::new("payload_scatter")
        .height(360.)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Outcome (0=Failure, 1=Success)")
        .y_axis_formatter(|mark, _range| outcome_tick(mark))
        .include_y(-0.25)
        .include_y(1.25)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            if let Some(annotation) = scatter.annotation() {
                let bounds = plot_ui.plot_bounds();
                let center = bounds.center();
                plot_ui.text(
                    Text::new("no_data", center, RichText::new(annotation).size(16.))
                        .color(Color32::GRAY),
                );
                return;
            }
            for (i, (category, points)) in groups.iter().enumerate() {
                let series = points.iter().map(|p| [p.x(), p.y()]).collect::<Vec<_>>();
                plot_ui.points(
                    Points::new(*category, PlotPoints::new(series))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(POINT_RADIUS)
                        .color(category_color(i, groups.len())),
                );
            }
        });

    let pointer = plot_response.response.hover_pos()?;
    nearest_point(scatter.points(), pointer, &plot_response.transform)
}

pub(crate) fn show_point_detail(ui: &mut Ui, point: Option<&ScatterPoint>) {
    match point {
        Some(point) => {
            ui.label(RichText::new(point.hover_text()).color(Color32::WHITE));
        }
        None => {
            ui.label(
                RichText::new("Hover a launch to inspect it")
                    .color(Color32::GRAY)
                    .italics(),
            );
        }
    }
}

pub(crate) fn show_points_table(ui: &mut Ui, scatter: &ScatterData) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20., |mut header| {
            for title in ["Flight", "Site", "Payload (kg)", "Booster", "Outcome"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            let points = scatter.points();
            body.rows(18., points.len(), |mut row| {
                let point = &points[row.index()];
                row.col(|ui| {
                    ui.label(
                        point
                            .record
                            .flight_number
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    );
                });
                row.col(|ui| {
                    ui.label(&point.record.launch_site);
                });
                row.col(|ui| {
                    ui.label(point.record.payload_mass_kg.to_string());
                });
                row.col(|ui| {
                    ui.label(point.record.booster_version.as_deref().unwrap_or("-"));
                });
                row.col(|ui| {
                    ui.label(point.outcome_label);
                });
            });
        });
}
