//! Session settings: board dimensions, drop interval base, key bindings,
//! and cosmetic options.
//!
//! Settings are immutable for the duration of a game session and are
//! consumed as parameters by the core and the adapters; none of the
//! transition logic reads them directly. They persist as JSON in the
//! platform config directory and fall back to defaults when the file is
//! missing or unreadable.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::types::{BASE_DROP_MS, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Key bindings for the fixed action set. Unbound keys are no-ops by
/// construction: no mapping entry, no transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub move_down: KeyCode,
    pub rotate: KeyCode,
    pub hard_drop: KeyCode,
    pub hold: KeyCode,
    pub pause: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_left: KeyCode::Left,
            move_right: KeyCode::Right,
            move_down: KeyCode::Down,
            rotate: KeyCode::Up,
            hard_drop: KeyCode::Char(' '),
            hold: KeyCode::Char('c'),
            pause: KeyCode::Char('p'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_width: u8,
    pub board_height: u8,
    /// Gravity base interval at level 0, milliseconds.
    pub base_drop_ms: u32,
    pub show_ghost_piece: bool,
    /// Tile skin name; selects a view palette, no effect on core logic.
    pub skin: String,
    pub controls: Controls,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            base_drop_ms: BASE_DROP_MS,
            show_ghost_piece: true,
            skin: "default".to_string(),
            controls: Controls::default(),
        }
    }
}

impl Settings {
    /// Platform config file location, e.g. `~/.config/blockfall/settings.json`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blockfall").join("settings.json"))
    }

    /// Load from the config file, or defaults when it is absent or invalid.
    pub fn load_or_default() -> Settings {
        let Some(path) = Self::config_path() else {
            return Settings::default();
        };
        fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist to the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no platform config directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_standard_board() {
        let settings = Settings::default();
        assert_eq!(settings.board_width, 10);
        assert_eq!(settings.board_height, 20);
        assert_eq!(settings.base_drop_ms, 1000);
        assert!(settings.show_ghost_piece);
        assert_eq!(settings.skin, "default");
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let mut settings = Settings::default();
        settings.skin = "mono".to_string();
        settings.controls.rotate = KeyCode::Char('w');

        let text = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"skin":"mono"}"#).unwrap();
        assert_eq!(back.skin, "mono");
        assert_eq!(back.board_width, 10);
        assert_eq!(back.controls, Controls::default());
    }
}
