use std::fmt;

use crate::{LaunchDashError, dataset::Dataset};

/// Sentinel dropdown value selecting every launch site.
pub const ALL_SITES: &str = "ALL";
const ALL_SITES_LABEL: &str = "All Sites";

/// Payload slider bounds used when the dataset gives us nothing better.
pub const DEFAULT_PAYLOAD_MIN_KG: f64 = 0.;
pub const DEFAULT_PAYLOAD_MAX_KG: f64 = 10000.;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => site == launch_site,
        }
    }

    /// The dropdown value for this selector, `ALL` for every site.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<SiteSelector> for String {
    fn from(value: SiteSelector) -> Self {
        value.value().to_string()
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Inclusive payload mass window in kilograms, `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, LaunchDashError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(LaunchDashError::InvalidPayloadRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Range covering every payload in the dataset, or the default slider bounds when the
    /// dataset is empty.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        dataset
            .payload_bounds()
            .and_then(|(low, high)| Self::new(low, high).ok())
            .unwrap_or_default()
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_PAYLOAD_MIN_KG,
            high: DEFAULT_PAYLOAD_MAX_KG,
        }
    }
}

/// Current UI filter values. Each dashboard session owns its own copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelector,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelector::All,
            payload_range: PayloadRange::for_dataset(dataset),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown entries: "All Sites" first, then every launch site in sorted order.
pub fn site_options(dataset: &Dataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.launch_sites().into_iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}
