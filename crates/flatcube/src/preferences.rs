//! User preferences.
//!
//! Loaded once at startup from the platform config directory; a missing or
//! malformed file falls back to compiled-in defaults. Only display and
//! interaction settings live here — cube state is never persisted.

use std::path::PathBuf;

use directories::ProjectDirs;
use flatcube_core::Sticker;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serde_impl::hex_color;

const PREFS_FILE_NAME: &str = "flatcube.yaml";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Preferences {
    /// Number of random moves applied by the scramble command.
    pub scramble_moves: usize,
    /// Sticker cell size, in points.
    pub cell_size: f32,
    /// Net and text colors.
    pub colors: ColorPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            scramble_moves: flatcube_core::SCRAMBLE_MOVE_COUNT,
            cell_size: 40.0,
            colors: ColorPreferences::default(),
        }
    }
}

impl Preferences {
    /// Loads preferences, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, PrefsError> {
        let path = prefs_file_path().ok_or(PrefsError::NoPreferencesPath)?;
        if !path.exists() {
            log::info!("No preferences file at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&std::fs::read_to_string(&path)?)?)
    }
}

fn prefs_file_path() -> Option<PathBuf> {
    Some(
        ProjectDirs::from("", "", "Flatcube")?
            .config_dir()
            .join(PREFS_FILE_NAME),
    )
}

#[derive(Error, Debug)]
enum PrefsError {
    #[error("unable to determine preferences path")]
    NoPreferencesPath,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Colors for the net and surrounding text, stored as `#rrggbb` strings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ColorPreferences {
    #[serde(with = "hex_color")]
    pub background: egui::Color32,
    #[serde(with = "hex_color")]
    pub border: egui::Color32,
    #[serde(with = "hex_color")]
    pub text: egui::Color32,
    /// Shown if a sticker ever fails to resolve to a color.
    #[serde(with = "hex_color")]
    pub fallback: egui::Color32,

    #[serde(with = "hex_color")]
    pub white: egui::Color32,
    #[serde(with = "hex_color")]
    pub orange: egui::Color32,
    #[serde(with = "hex_color")]
    pub green: egui::Color32,
    #[serde(with = "hex_color")]
    pub red: egui::Color32,
    #[serde(with = "hex_color")]
    pub blue: egui::Color32,
    #[serde(with = "hex_color")]
    pub yellow: egui::Color32,
}

impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(200, 200, 200),
            border: egui::Color32::from_rgb(20, 20, 20),
            text: egui::Color32::from_rgb(30, 30, 30),
            fallback: egui::Color32::from_rgb(30, 30, 30),

            white: egui::Color32::WHITE,
            orange: egui::Color32::from_rgb(255, 165, 0),
            green: egui::Color32::from_rgb(0, 180, 0),
            red: egui::Color32::from_rgb(200, 0, 0),
            blue: egui::Color32::from_rgb(0, 0, 200),
            yellow: egui::Color32::from_rgb(255, 255, 0),
        }
    }
}

impl ColorPreferences {
    /// The display color for a sticker.
    pub fn sticker(&self, sticker: Sticker) -> egui::Color32 {
        match sticker {
            Sticker::White => self.white,
            Sticker::Orange => self.orange,
            Sticker::Green => self.green,
            Sticker::Red => self.red,
            Sticker::Blue => self.blue,
            Sticker::Yellow => self.yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_a_yaml_round_trip() {
        let defaults = Preferences::default();
        let yaml = serde_yaml::to_string(&defaults).expect("serialize");
        let parsed: Preferences = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(defaults.scramble_moves, parsed.scramble_moves);
        assert_eq!(defaults.cell_size, parsed.cell_size);
        assert_eq!(defaults.colors.orange, parsed.colors.orange);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let parsed: Preferences = serde_yaml::from_str("scramble_moves: 5").expect("deserialize");
        assert_eq!(5, parsed.scramble_moves);
        assert_eq!(Preferences::default().cell_size, parsed.cell_size);
        assert_eq!(Preferences::default().colors.white, parsed.colors.white);
    }
}
