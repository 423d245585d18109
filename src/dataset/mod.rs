pub mod loader;

use std::{fmt, path::Path};

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::LaunchDashError;

pub use loader::{REQUIRED_COLUMNS, load_launches_csv, read_launches};

/// Outcome of a launch as recorded in the `class` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl TryFrom<f64> for OutcomeClass {
    type Error = LaunchDashError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1. {
            Ok(Self::Success)
        } else if value == 0. {
            Ok(Self::Failure)
        } else {
            Err(LaunchDashError::InvalidOutcomeClass { value })
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(value: OutcomeClass) -> Self {
        value.value()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single row of the launch dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number, pass-through metadata
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    /// Launch site identifier, e.g. `CCAFS LC-40`
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: OutcomeClass,
    /// Full booster version string, pass-through metadata
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    /// Coarse booster grouping, e.g. `v1.1` or `FT`
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn with_flight_number(mut self, flight_number: u32) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_booster_version(mut self, booster_version: impl Into<String>) -> Self {
        self.booster_version = Some(booster_version.into());
        self
    }
}

/// Immutable table of launch records. Built once and shared behind an `Arc` for the
/// lifetime of the process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, LaunchDashError> {
        load_launches_csv(path)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites, sorted ascending
    pub fn launch_sites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Smallest and largest payload mass in the table, truncated to whole kilograms.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        match self
            .records
            .iter()
            .map(|r| r.payload_mass_kg)
            .filter(|v| v.is_finite())
            .minmax_by(|a, b| a.total_cmp(b))
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v.trunc(), v.trunc())),
            MinMaxResult::MinMax(min, max) => Some((min.trunc(), max.trunc())),
        }
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
