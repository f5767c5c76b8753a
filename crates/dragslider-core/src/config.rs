//! Slider configuration and JSON presets.

use std::fs;
use std::path::Path;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::{SliderDelta, SliderRange};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Preset list is empty")]
    Empty,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Range and delta bundle applied to a slider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub range: SliderRange,
    pub delta: SliderDelta,
}

impl SliderConfig {
    pub fn new(range: SliderRange, delta: SliderDelta) -> Self {
        Self { range, delta }
    }

    /// Build a configuration from a rectangle and per-axis deltas.
    pub fn from_rect(rect: Rect, delta_x: f64, delta_y: f64) -> Self {
        Self::new(SliderRange::from_rect(rect), SliderDelta::new(delta_x, delta_y))
    }

    /// Build a configuration from an origin/size rectangle and per-axis deltas.
    pub fn from_origin_size(
        origin: Point,
        width: f64,
        height: f64,
        delta_x: f64,
        delta_y: f64,
    ) -> Self {
        Self::new(
            SliderRange::from_origin_size(origin, width, height),
            SliderDelta::new(delta_x, delta_y),
        )
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Axes that can never move under this configuration.
    pub fn frozen_axes(&self) -> Vec<&'static str> {
        let mut axes = Vec::new();
        if !self.range.can_change_x() {
            axes.push("x");
        }
        if !self.range.can_change_y() {
            axes.push("y");
        }
        axes
    }
}

/// A named configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedConfig {
    pub name: String,
    #[serde(flatten)]
    pub config: SliderConfig,
}

impl NamedConfig {
    pub fn new(name: impl Into<String>, config: SliderConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// An ordered, non-empty list of presets that can be cycled through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetList {
    presets: Vec<NamedConfig>,
}

impl PresetList {
    /// Create a preset list. Fails if `presets` is empty.
    pub fn new(presets: Vec<NamedConfig>) -> ConfigResult<Self> {
        if presets.is_empty() {
            return Err(ConfigError::Empty);
        }
        for preset in &presets {
            let frozen = preset.config.frozen_axes();
            if !frozen.is_empty() {
                log::warn!("Preset '{}' has frozen axes: {}", preset.name, frozen.join(", "));
            }
        }
        Ok(Self { presets })
    }

    /// A list holding one preset.
    pub fn single(preset: NamedConfig) -> Self {
        Self {
            presets: vec![preset],
        }
    }

    /// Append a preset.
    pub fn with(mut self, preset: NamedConfig) -> Self {
        self.presets.push(preset);
        self
    }

    /// Parse a preset list from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let parsed: PresetList = serde_json::from_str(json)?;
        Self::new(parsed.presets)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a preset list from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let presets = Self::from_json(&content)?;
        log::info!("Loaded {} presets from {}", presets.len(), path.display());
        Ok(presets)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Get a preset by index, wrapping around.
    pub fn get(&self, index: usize) -> &NamedConfig {
        &self.presets[index % self.presets.len()]
    }

    /// Find a preset by name.
    pub fn find(&self, name: &str) -> Option<&NamedConfig> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Index of the preset after `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.presets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedConfig> {
        self.presets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_json_roundtrip_with_defaults() {
        let json = r#"{"range": {"min_x": -5.0, "max_x": 5.0, "min_y": 0.0, "max_y": 1.0}}"#;
        let config = SliderConfig::from_json(json).unwrap();
        assert!((config.range.min_x + 5.0).abs() < f64::EPSILON);
        assert_eq!(config.delta, SliderDelta::default());
    }

    #[test]
    fn test_from_origin_size() {
        let config =
            SliderConfig::from_origin_size(Point::new(-1000.0, -1000.0), 2000.0, 2000.0, 1.0, 1.0);
        assert!((config.range.max_x - 1000.0).abs() < f64::EPSILON);
        assert!(config.frozen_axes().is_empty());
    }

    #[test]
    fn test_frozen_axes() {
        let config =
            SliderConfig::new(SliderRange::new(0.0, 0.0, 10.0, 0.0), SliderDelta::default());
        assert_eq!(config.frozen_axes(), vec!["x", "y"]);
    }

    #[test]
    fn test_preset_list_parse() {
        let json = r#"{
            "presets": [
                {"name": "wide", "range": {"min_x": -1000.0, "max_x": 1000.0, "min_y": -1000.0, "max_y": 1000.0}, "delta": {"x": 1.0, "y": 1.0}},
                {"name": "small", "range": {"min_x": 0.0, "max_x": 100.0, "min_y": 0.0, "max_y": 100.0}, "delta": {"x": 0.5, "y": 0.5}}
            ]
        }"#;
        let presets = PresetList::from_json(json).unwrap();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets.get(0).name, "wide");
        assert_eq!(presets.get(3).name, "small");
        assert_eq!(presets.next_index(1), 0);
        assert!((presets.find("small").unwrap().config.delta.x - 0.5).abs() < f64::EPSILON);
        assert!(presets.find("missing").is_none());
    }

    #[test]
    fn test_preset_builder() {
        let wide = NamedConfig::new(
            "wide",
            SliderConfig::from_origin_size(Point::new(-1000.0, -1000.0), 2000.0, 2000.0, 1.0, 1.0),
        );
        let small = NamedConfig::new("small", SliderConfig::default());
        let presets = PresetList::single(wide).with(small);
        assert_eq!(presets.len(), 2);
        assert_eq!(presets.get(1).name, "small");
        assert_eq!(presets.iter().count(), 2);
    }

    #[test]
    fn test_empty_preset_list_rejected() {
        let err = PresetList::from_json(r#"{"presets": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = PresetList::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let presets = PresetList::new(vec![NamedConfig {
            name: "only".to_string(),
            config: SliderConfig::default(),
        }])
        .unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(presets.to_json().unwrap().as_bytes()).unwrap();

        let loaded = PresetList::load(file.path()).unwrap();
        assert_eq!(loaded, presets);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PresetList::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
