use std::path::Path;

use log::info;

use crate::{LaunchDashError, engine::ScatterData};

/// Writes the filtered launches as JSON lines, one object per point. The empty state
/// produces an empty file.
pub fn write_points(output_file: &Path, scatter: &ScatterData) -> Result<(), LaunchDashError> {
    serde_jsonlines::write_json_lines(output_file, scatter.points()).map_err(|e| {
        LaunchDashError::ExportError {
            path: output_file.to_path_buf(),
            source: e,
        }
    })?;
    info!(
        "Exported {} launches to {:?}",
        scatter.points().len(),
        output_file
    );
    Ok(())
}
