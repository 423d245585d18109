use itertools::Itertools;

use crate::{dataset::Dataset, selection::SiteSelector};

const ALL_SITES_TITLE: &str = "Total Successful Launches by Site (All Sites)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Pie chart input: an ordered mapping from category label to count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieChartData {
    pub title: String,
    pub slices: Vec<CategoryCount>,
}

impl PieChartData {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.count)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.slices.iter().map(|s| (s.label.as_str(), s.count))
    }
}

/// Success counts per site for `All`, or success/failure counts for a single site.
/// Unknown sites produce an empty chart.
pub fn success_pie(dataset: &Dataset, site: &SiteSelector) -> PieChartData {
    match site {
        SiteSelector::All => {
            let slices = dataset
                .iter()
                .filter(|r| r.outcome.is_success())
                .counts_by(|r| r.launch_site.as_str())
                .into_iter()
                .sorted_by(|a, b| a.0.cmp(b.0))
                .map(|(label, count)| CategoryCount {
                    label: label.to_string(),
                    count,
                })
                .collect();
            PieChartData {
                title: ALL_SITES_TITLE.to_string(),
                slices,
            }
        }
        SiteSelector::Site(name) => {
            // largest slice first, success wins a tie
            let slices = dataset
                .iter()
                .filter(|r| r.launch_site == *name)
                .counts_by(|r| r.outcome)
                .into_iter()
                .sorted_by(|a, b| b.1.cmp(&a.1).then(b.0.value().cmp(&a.0.value())))
                .map(|(outcome, count)| CategoryCount {
                    label: outcome.label().to_string(),
                    count,
                })
                .collect();
            PieChartData {
                title: format!("Launch Outcomes at Site: {}", name),
                slices,
            }
        }
    }
}
