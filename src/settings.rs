use crate::indicator::Shade;
use crate::layout::WINDOW_SIZE;
use eframe::egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Background of an indicator while its key is held, as `[r, g, b]`.
    #[serde(default = "default_active_color")]
    pub active_color: [u8; 3],
    /// Background of an idle indicator.
    #[serde(default = "default_inactive_color")]
    pub inactive_color: [u8; 3],
    /// Point size of the arrow glyph.
    #[serde(default = "default_glyph_size")]
    pub glyph_size: f32,
    /// Edge length of each square indicator window.
    #[serde(default = "default_window_size")]
    pub window_size: f32,
    /// Screen size assumed when the monitor size cannot be queried.
    #[serde(default = "default_fallback_screen")]
    pub fallback_screen: (f32, f32),
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write logs to this file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_active_color() -> [u8; 3] {
    [0, 0, 0]
}

fn default_inactive_color() -> [u8; 3] {
    [255, 255, 255]
}

fn default_glyph_size() -> f32 {
    24.0
}

fn default_window_size() -> f32 {
    WINDOW_SIZE
}

fn default_fallback_screen() -> (f32, f32) {
    (1920.0, 1080.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_color: default_active_color(),
            inactive_color: default_inactive_color(),
            glyph_size: default_glyph_size(),
            window_size: default_window_size(),
            fallback_screen: default_fallback_screen(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn color(&self, shade: Shade) -> Color32 {
        let [r, g, b] = match shade {
            Shade::Active => self.active_color,
            Shade::Inactive => self.inactive_color,
        };
        Color32::from_rgb(r, g, b)
    }

    pub fn fallback_screen(&self) -> Vec2 {
        Vec2::new(self.fallback_screen.0, self.fallback_screen.1)
    }
}

/// Black or white, whichever reads better on `bg`.
pub fn contrasting(bg: Color32) -> Color32 {
    let luma = 0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
    if luma > 127.5 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
