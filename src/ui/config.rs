use std::path::PathBuf;

use egui::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use launchdash::{
    LaunchDashError,
    selection::{DEFAULT_PAYLOAD_MAX_KG, DEFAULT_PAYLOAD_MIN_KG},
};

const CONFIG_DIR_NAME: &str = "launchdash";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WindowSize {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.,
            height: 900.,
        }
    }
}

impl From<WindowSize> for Vec2 {
    fn from(value: WindowSize) -> Self {
        Vec2::new(value.width, value.height)
    }
}

impl From<Vec2> for WindowSize {
    fn from(value: Vec2) -> Self {
        Self {
            width: value.x,
            height: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) slider_min_kg: f64,
    pub(crate) slider_max_kg: f64,
    pub(crate) slider_step_kg: f64,
    pub(crate) slider_mark_kg: f64,
    pub(crate) window_size: WindowSize,
    pub(crate) last_dataset: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slider_min_kg: DEFAULT_PAYLOAD_MIN_KG,
            slider_max_kg: DEFAULT_PAYLOAD_MAX_KG,
            slider_step_kg: 1000.,
            slider_mark_kg: 2000.,
            window_size: WindowSize::default(),
            last_dataset: None,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    /// Reads the saved config, `None` when there is no usable file.
    pub(crate) fn from_local_file() -> Option<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let file = std::fs::File::open(&config_path)
            .map_err(|e| warn!("Could not open config file {:?}: {}", config_path, e))
            .ok()?;
        serde_json::from_reader(file)
            .map_err(|e| warn!("Could not parse config file {:?}: {}", config_path, e))
            .ok()
    }

    pub(crate) fn save(&self) -> Result<(), LaunchDashError> {
        let config_path = Self::config_path().ok_or(LaunchDashError::NoConfigDir)?;

        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| LaunchDashError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| LaunchDashError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| LaunchDashError::ConfigSerializeError { source: e })
    }

    /// Slider bounds, widened when the dataset holds payloads outside the configured range.
    pub(crate) fn slider_bounds(&self, payload_bounds: Option<(f64, f64)>) -> (f64, f64) {
        match payload_bounds {
            Some((min, max)) => (self.slider_min_kg.min(min), self.slider_max_kg.max(max)),
            None => (self.slider_min_kg, self.slider_max_kg),
        }
    }

    /// Values that get a labelled tick under the slider.
    pub(crate) fn slider_marks(&self, bounds: (f64, f64)) -> Vec<f64> {
        if self.slider_mark_kg <= 0. {
            return vec![bounds.0, bounds.1];
        }
        let first = (bounds.0 / self.slider_mark_kg).ceil() as i64;
        let last = (bounds.1 / self.slider_mark_kg).floor() as i64;
        (first..=last)
            .map(|i| i as f64 * self.slider_mark_kg)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"slider_step_kg": 500.0}"#).unwrap();
        assert_eq!(config.slider_step_kg, 500.);
        assert_eq!(config.slider_max_kg, 10000.);
        assert_eq!(config.last_dataset, None);
    }

    #[test]
    fn test_slider_bounds_widen_to_dataset() {
        let config = AppConfig::default();
        assert_eq!(config.slider_bounds(None), (0., 10000.));
        assert_eq!(config.slider_bounds(Some((0., 9600.))), (0., 10000.));
        assert_eq!(config.slider_bounds(Some((0., 15600.))), (0., 15600.));
    }

    #[test]
    fn test_slider_marks() {
        let config = AppConfig::default();
        assert_eq!(
            config.slider_marks((0., 10000.)),
            vec![0., 2000., 4000., 6000., 8000., 10000.]
        );
    }
}
