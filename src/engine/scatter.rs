use itertools::Itertools;
use serde::Serialize;

use crate::{
    dataset::{Dataset, LaunchRecord},
    selection::{PayloadRange, SiteSelector},
};

pub const SCATTER_TITLE: &str = "Payload vs. Outcome (class) — colored by Booster Version";
pub const NO_DATA_TITLE: &str = "No data for the selected combination of site & payload range";
pub const NO_DATA_ANNOTATION: &str = "No records match filters";

/// A launch plotted at (payload mass, outcome class), colored by booster category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    #[serde(flatten)]
    pub record: LaunchRecord,
    #[serde(rename = "Outcome")]
    pub outcome_label: &'static str,
}

impl ScatterPoint {
    pub fn x(&self) -> f64 {
        self.record.payload_mass_kg
    }

    pub fn y(&self) -> f64 {
        self.record.outcome.value() as f64
    }

    pub fn color_group(&self) -> &str {
        &self.record.booster_version_category
    }

    /// Metadata shown when the point is inspected.
    pub fn hover_text(&self) -> String {
        let flight_number = self
            .record
            .flight_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "Launch Site: {}\nFlight Number: {}\nPayload Mass (kg): {}\nBooster Version: {}\nOutcome: {}",
            self.record.launch_site,
            flight_number,
            self.record.payload_mass_kg,
            self.record.booster_version.as_deref().unwrap_or("-"),
            self.outcome_label,
        )
    }
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            record: record.clone(),
            outcome_label: record.outcome.label(),
        }
    }
}

/// Scatter chart input. An empty filter result is its own state so the chart can show an
/// annotation rather than a blank frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ScatterData {
    NoData,
    Points(Vec<ScatterPoint>),
}

impl ScatterData {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoData => NO_DATA_TITLE,
            Self::Points(_) => SCATTER_TITLE,
        }
    }

    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            Self::NoData => Some(NO_DATA_ANNOTATION),
            Self::Points(_) => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn points(&self) -> &[ScatterPoint] {
        match self {
            Self::NoData => &[],
            Self::Points(points) => points,
        }
    }

    /// Points grouped by booster version category, categories sorted ascending.
    pub fn by_booster_category(&self) -> Vec<(&str, Vec<&ScatterPoint>)> {
        self.points()
            .iter()
            .map(|p| (p.color_group(), p))
            .into_group_map()
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .collect()
    }
}

/// Launches within the payload range (inclusive), narrowed to one site unless `site` is
/// `All`. Dataset order is preserved.
pub fn filter_scatter(
    dataset: &Dataset,
    site: &SiteSelector,
    range: &PayloadRange,
) -> ScatterData {
    let points = dataset
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(ScatterPoint::from)
        .collect_vec();

    if points.is_empty() {
        ScatterData::NoData
    } else {
        ScatterData::Points(points)
    }
}
