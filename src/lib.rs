// Library interface for launchdash
// This allows integration tests to access internal modules

pub mod dataset;
pub mod engine;
pub mod errors;
pub mod export;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use dataset::{Dataset, LaunchRecord, OutcomeClass};
pub use engine::{PieChartData, ScatterData, ScatterPoint};
pub use errors::LaunchDashError;
pub use selection::{PayloadRange, SelectionState, SiteSelector};
pub use session::{DashboardSession, SelectionChange, SelectionObserver};
