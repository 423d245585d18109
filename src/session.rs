use std::sync::Arc;

use log::debug;

use crate::{
    dataset::Dataset,
    engine::{PieChartData, ScatterData, filter_scatter, payload_range_label, success_pie},
    selection::{PayloadRange, SelectionState, SiteSelector},
};

/// A single input change coming from the dashboard controls.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionChange {
    Site(SiteSelector),
    PayloadRange(PayloadRange),
}

/// Identifies one of the derived outputs kept by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Pie,
    PayloadLabel,
    Scatter,
}

/// A freshly recomputed output, handed to observers.
#[derive(Debug)]
pub enum DerivedOutput<'a> {
    Pie(&'a PieChartData),
    PayloadLabel(&'a str),
    Scatter(&'a ScatterData),
}

impl DerivedOutput<'_> {
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Pie(_) => OutputKind::Pie,
            Self::PayloadLabel(_) => OutputKind::PayloadLabel,
            Self::Scatter(_) => OutputKind::Scatter,
        }
    }
}

pub trait SelectionObserver {
    fn observe(&mut self, output: &DerivedOutput<'_>);
}

/// Logs every refresh at debug level.
#[derive(Default)]
pub struct LoggingObserver;

impl SelectionObserver for LoggingObserver {
    fn observe(&mut self, output: &DerivedOutput<'_>) {
        match output {
            DerivedOutput::Pie(pie) => debug!(
                "Pie chart refreshed: {} slices, {} launches",
                pie.slices.len(),
                pie.total()
            ),
            DerivedOutput::PayloadLabel(label) => debug!("Payload label refreshed: {}", label),
            DerivedOutput::Scatter(scatter) => {
                debug!("Scatter refreshed: {} points", scatter.points().len())
            }
        }
    }
}

/// Selection state for one dashboard plus the outputs derived from it. The dataset is
/// shared and never written; each session owns its selection.
pub struct DashboardSession {
    dataset: Arc<Dataset>,
    selection: SelectionState,
    pie: PieChartData,
    payload_label: String,
    scatter: ScatterData,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl DashboardSession {
    pub fn new(dataset: Arc<Dataset>, selection: SelectionState) -> Self {
        let pie = success_pie(&dataset, &selection.site);
        let payload_label = payload_range_label(
            selection.payload_range.low(),
            selection.payload_range.high(),
        );
        let scatter = filter_scatter(&dataset, &selection.site, &selection.payload_range);
        Self {
            dataset,
            selection,
            pie,
            payload_label,
            scatter,
            observers: Vec::new(),
        }
    }

    /// Session with every site selected and the full payload range of the dataset.
    pub fn with_defaults(dataset: Arc<Dataset>) -> Self {
        let selection = SelectionState::for_dataset(&dataset);
        Self::new(dataset, selection)
    }

    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    /// Applies a selection change, recomputes only the outputs that depend on it and
    /// notifies observers in registration order. Returns the refreshed outputs.
    pub fn apply(&mut self, change: SelectionChange) -> Vec<OutputKind> {
        let refreshed = match change {
            SelectionChange::Site(site) => {
                self.selection.site = site;
                self.pie = success_pie(&self.dataset, &self.selection.site);
                vec![OutputKind::Pie, OutputKind::Scatter]
            }
            SelectionChange::PayloadRange(range) => {
                self.selection.payload_range = range;
                self.payload_label = payload_range_label(range.low(), range.high());
                vec![OutputKind::PayloadLabel, OutputKind::Scatter]
            }
        };
        self.scatter = filter_scatter(
            &self.dataset,
            &self.selection.site,
            &self.selection.payload_range,
        );

        for kind in &refreshed {
            let output = match kind {
                OutputKind::Pie => DerivedOutput::Pie(&self.pie),
                OutputKind::PayloadLabel => DerivedOutput::PayloadLabel(&self.payload_label),
                OutputKind::Scatter => DerivedOutput::Scatter(&self.scatter),
            };
            for observer in self.observers.iter_mut() {
                observer.observe(&output);
            }
        }
        refreshed
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn pie(&self) -> &PieChartData {
        &self.pie
    }

    pub fn payload_label(&self) -> &str {
        &self.payload_label
    }

    pub fn scatter(&self) -> &ScatterData {
        &self.scatter
    }
}
