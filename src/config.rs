use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "PlaybackConfig::default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "PlaybackConfig::default_wait_user_start")]
    pub wait_user_start: bool,
    #[serde(default = "PlaybackConfig::default_wait_user_exit")]
    pub wait_user_exit: bool,
}

impl PlaybackConfig {
    fn default_interval_ms() -> u64 {
        500
    }
    fn default_wait_user_start() -> bool {
        false
    }
    fn default_wait_user_exit() -> bool {
        true
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: Self::default_interval_ms(),
            wait_user_start: Self::default_wait_user_start(),
            wait_user_exit: Self::default_wait_user_exit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "GridConfig::default_samples")]
    pub samples: usize,
}

impl GridConfig {
    fn default_samples() -> usize {
        1000
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            samples: Self::default_samples(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_width")]
    pub width: f32,
    #[serde(default = "WindowConfig::default_height")]
    pub height: f32,
    #[serde(default = "WindowConfig::default_pixels_per_point")]
    pub pixels_per_point: f32,
}

impl WindowConfig {
    fn default_width() -> f32 {
        1000.0
    }
    fn default_height() -> f32 {
        800.0
    }
    fn default_pixels_per_point() -> f32 {
        1.25
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            pixels_per_point: Self::default_pixels_per_point(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl AppConfig {
    fn format_f32_compact(x: f32) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    /// Render defaults as a fully commented template: section headers stay
    /// live, every key is commented out.
    fn commented_template(text: &str) -> String {
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
                continue;
            }
            let mut out_line = line.to_string();
            if let Some((lhs, rhs)) = line.split_once('=') {
                let rhs_trim = rhs.trim();
                if rhs_trim.contains('.') && !rhs_trim.contains('"') {
                    if let Ok(val) = rhs_trim.parse::<f32>() {
                        let mut formatted = Self::format_f32_compact(val);
                        if !formatted.contains('.') {
                            formatted.push_str(".0");
                        }
                        out_line = format!("{} = {}", lhs.trim(), formatted);
                    }
                }
            }
            commented.push_str("# ");
            commented.push_str(&out_line);
            commented.push('\n');
        }
        commented
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => warn!("Failed to parse config {path}: {err}. Using defaults."),
                },
                Err(err) => warn!("Failed to read config {path}: {err}. Using defaults."),
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, Self::commented_template(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                } else {
                    info!("Wrote default config to {path}");
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "densweep_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.playback.interval_ms, 500);
        assert!(!cfg.playback.wait_user_start);
        assert!(cfg.playback.wait_user_exit);
        assert_eq!(cfg.grid.samples, 1000);
        assert_eq!(cfg.window.pixels_per_point, 1.25);

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(contents.contains("[playback]"));
        assert!(contents.contains("# interval_ms = 500"));
        assert!(contents.contains("# pixels_per_point = 1.25"));
        assert!(contents.contains("# width = 1000.0"));

        // a fully commented file parses back to the defaults
        let reread = AppConfig::load_or_default(&path_str);
        assert_eq!(reread.grid.samples, 1000);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let path = unique_path("partial.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[playback]\ninterval_ms = 50\n").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.playback.interval_ms, 50);
        assert!(cfg.playback.wait_user_exit);
        assert_eq!(cfg.grid.samples, 1000);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let path = unique_path("broken.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[grid\nsamples = ").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.grid.samples, 1000);

        let _ = fs::remove_file(&path);
    }
}
