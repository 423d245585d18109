mod pie_view;
mod scatter_view;

use std::{path::PathBuf, sync::Arc};

use egui::{Color32, Frame, Margin, RichText, Slider, Ui};
use egui_dropdown::DropDownBox;
use log::{error, info, warn};

use launchdash::{
    Dataset, DashboardSession, PayloadRange, SelectionChange, SiteSelector,
    selection::{SiteOption, site_options},
    session::LoggingObserver,
};

use super::{config::AppConfig, dashboard_visuals};

const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
const DASHBOARD_NOTES: &str = "Use the dropdown to filter launch site(s). Use the payload slider to limit payload mass range. \
Pie chart shows success counts; scatter shows payload vs. outcome (class = 1 success, 0 failure) colored by Booster Version.";

/// Desktop dashboard over a single launch dataset. Every control change is turned into a
/// `SelectionChange` and applied to the session; the panels only render session outputs.
pub(crate) struct LaunchDashboardApp {
    session: DashboardSession,
    source_file: Option<PathBuf>,
    site_options: Vec<SiteOption>,
    selected_site_label: String,
    slider_bounds: (f64, f64),
    payload_low: f64,
    payload_high: f64,
    hovered_point: Option<usize>,
    load_error: Option<String>,
    app_config: AppConfig,
}

impl LaunchDashboardApp {
    pub(crate) fn new(
        dataset: Arc<Dataset>,
        source_file: Option<PathBuf>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());
        let session = Self::new_session(dataset);
        let slider_bounds = app_config.slider_bounds(session.dataset().payload_bounds());
        let range = session.selection().payload_range;
        let site_options = site_options(session.dataset());

        Self {
            selected_site_label: site_options[0].label.clone(),
            site_options,
            slider_bounds,
            payload_low: range.low(),
            payload_high: range.high(),
            hovered_point: None,
            load_error: None,
            source_file,
            app_config,
            session,
        }
    }

    fn new_session(dataset: Arc<Dataset>) -> DashboardSession {
        let mut session = DashboardSession::with_defaults(dataset);
        session.add_observer(Box::new(LoggingObserver));
        session
    }

    fn open_dataset(&mut self, path: PathBuf) {
        match Dataset::from_csv_path(&path) {
            Ok(dataset) => {
                info!("Switching dashboard to {:?}", path);
                let session = Self::new_session(Arc::new(dataset));
                let range = session.selection().payload_range;
                self.slider_bounds = self
                    .app_config
                    .slider_bounds(session.dataset().payload_bounds());
                self.site_options = site_options(session.dataset());
                self.selected_site_label = self.site_options[0].label.clone();
                self.payload_low = range.low();
                self.payload_high = range.high();
                self.hovered_point = None;
                self.load_error = None;
                self.session = session;
                self.app_config.last_dataset = Some(path.clone());
                self.source_file = Some(path);
            }
            Err(e) => {
                error!("Could not load dataset {:?}: {}", path, e);
                self.load_error = Some(format!("Could not load {:?}: {}", path, e));
            }
        }
    }

    fn show_site_selector(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Select Launch Site:").color(Color32::WHITE).strong());
            let labels = self.site_options.iter().map(|o| o.label.as_str());
            ui.add(
                DropDownBox::from_iter(
                    labels,
                    "site_dropbox",
                    &mut self.selected_site_label,
                    |ui, text| ui.selectable_label(false, text),
                )
                .filter_by_input(false),
            );
        });

        // the text box may hold a partial edit, only act on a complete option
        if let Some(option) = self
            .site_options
            .iter()
            .find(|o| o.label == self.selected_site_label)
        {
            let selector = SiteSelector::from(option.value.as_str());
            if selector != self.session.selection().site {
                self.hovered_point = None;
                self.session.apply(SelectionChange::Site(selector));
            }
        }
    }

    fn show_payload_slider(&mut self, ui: &mut Ui) {
        let (min, max) = self.slider_bounds;
        let step = self.app_config.slider_step_kg;
        ui.label(
            RichText::new("Select Payload Range (kg):")
                .color(Color32::WHITE)
                .strong(),
        );
        let low_changed = ui
            .add(
                Slider::new(&mut self.payload_low, min..=max)
                    .step_by(step)
                    .text("min kg"),
            )
            .changed();
        let high_changed = ui
            .add(
                Slider::new(&mut self.payload_high, min..=max)
                    .step_by(step)
                    .text("max kg"),
            )
            .changed();

        // keep the handles ordered, the one being dragged pushes the other
        if self.payload_low > self.payload_high {
            if low_changed {
                self.payload_high = self.payload_low;
            } else {
                self.payload_low = self.payload_high;
            }
        }

        ui.horizontal(|ui| {
            for mark in self.app_config.slider_marks(self.slider_bounds) {
                ui.label(RichText::new(mark.to_string()).color(Color32::GRAY).small());
            }
        });

        if low_changed || high_changed {
            match PayloadRange::new(self.payload_low, self.payload_high) {
                Ok(range) => {
                    self.hovered_point = None;
                    self.session.apply(SelectionChange::PayloadRange(range));
                }
                Err(e) => warn!("Ignoring slider position: {}", e),
            }
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.session.payload_label()).color(Color32::WHITE));
        });
    }
}

impl eframe::App for LaunchDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(inner_rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.app_config.window_size = inner_rect.size().into();
        }

        egui::TopBottomPanel::top("dashboard_top_bar")
            .frame(Frame::new().inner_margin(Margin::same(6)))
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    if ui.button("📂 Open dataset").clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                    {
                        self.open_dataset(path);
                    }
                    if let Some(source_file) = &self.source_file {
                        ui.separator();
                        ui.label(
                            RichText::new(format!(
                                "{} ({} launches)",
                                source_file.display(),
                                self.session.dataset().len()
                            ))
                            .color(Color32::GRAY),
                        );
                    }
                });
                if let Some(message) = &self.load_error {
                    ui.label(RichText::new(message).color(Color32::RED).strong());
                }
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(DASHBOARD_TITLE).color(Color32::WHITE).strong());
                });
            });

        egui::SidePanel::right("launch_detail")
            .frame(Frame::new().inner_margin(Margin::same(6)))
            .resizable(true)
            .min_width(280.)
            .show(ctx, |ui| {
                ui.label(RichText::new("Launch").color(Color32::WHITE).strong());
                ui.separator();
                let hovered = self
                    .hovered_point
                    .and_then(|i| self.session.scatter().points().get(i));
                scatter_view::show_point_detail(ui, hovered);
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Filtered launches: {}",
                        self.session.scatter().points().len()
                    ))
                    .color(Color32::WHITE),
                );
                scatter_view::show_points_table(ui, self.session.scatter());
            });

        egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(Margin::same(10)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_site_selector(ui);
                    ui.add_space(8.);
                    pie_view::show_pie(ui, self.session.pie());
                    ui.separator();
                    self.show_payload_slider(ui);
                    ui.add_space(8.);
                    self.hovered_point = scatter_view::show_scatter(ui, self.session.scatter());
                    ui.add_space(8.);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(DASHBOARD_NOTES).color(Color32::GRAY).small());
                    });
                });
            });
    }
}
