use std::fs;
use std::path::PathBuf;

use densweep::config::{AppConfig, GridConfig, PlaybackConfig, WindowConfig};

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "densweep_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn custom_config_round_trips_through_toml() {
    let path = unique_path("custom.toml");
    let custom = AppConfig {
        playback: PlaybackConfig {
            interval_ms: 120,
            wait_user_start: true,
            wait_user_exit: false,
        },
        grid: GridConfig { samples: 400 },
        window: WindowConfig {
            width: 640.0,
            height: 480.0,
            pixels_per_point: 2.0,
        },
    };
    fs::write(&path, toml::to_string_pretty(&custom).unwrap()).unwrap();

    let cfg = AppConfig::load_or_default(&path.to_string_lossy());
    assert_eq!(cfg.playback.interval_ms, 120);
    assert!(cfg.playback.wait_user_start);
    assert!(!cfg.playback.wait_user_exit);
    assert_eq!(cfg.grid.samples, 400);
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.window.height, 480.0);
    assert_eq!(cfg.window.pixels_per_point, 2.0);

    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_keys_are_ignored() {
    let path = unique_path("extra.toml");
    fs::write(&path, "[grid]\nsamples = 64\ncolor = \"red\"\n").unwrap();
    let cfg = AppConfig::load_or_default(&path.to_string_lossy());
    assert_eq!(cfg.grid.samples, 64);
    let _ = fs::remove_file(&path);
}
