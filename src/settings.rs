use serde::{Deserialize, Serialize};

/// Startup options. Read once and never written back; runtime changes such
/// as the window position or the text colour are not persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Window opacity between `0.1` and `1.0`.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Start with the network panel already shown.
    #[serde(default)]
    pub start_with_network: bool,
    /// Distance between the window and the right edge of the work area.
    #[serde(default = "default_screen_margin")]
    pub screen_margin: f32,
    #[serde(default = "default_top_offset")]
    pub top_offset: f32,
}

fn default_opacity() -> f32 {
    0.6
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_screen_margin() -> f32 {
    300.0
}

fn default_top_offset() -> f32 {
    5.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            opacity: default_opacity(),
            tick_interval_ms: default_tick_interval(),
            start_with_network: false,
            screen_margin: default_screen_margin(),
            top_offset: default_top_offset(),
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

    pub fn opacity(&self) -> f32 {
        if self.opacity.is_finite() {
            self.opacity.clamp(0.1, 1.0)
        } else {
            tracing::warn!(opacity = self.opacity, "invalid opacity; using default");
            default_opacity()
        }
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(100))
    }
}
