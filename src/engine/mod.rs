//! Pure functions turning the launch dataset and the current selection into chart data.
//! Nothing in here holds state; every call recomputes its result from scratch.

pub mod label;
pub mod pie;
pub mod scatter;

pub use label::payload_range_label;
pub use pie::{CategoryCount, PieChartData, success_pie};
pub use scatter::{ScatterData, ScatterPoint, filter_scatter};
