use clap::Parser;

use crate::config::AppConfig;
use crate::sweep::SweepKind;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Which density sweep to animate
    #[arg(value_enum, value_name = "SWEEP")]
    pub sweep: SweepKind,

    /// Path to config TOML
    #[arg(long, default_value = "densweep.toml")]
    pub config: String,

    /// Run without GUI (frames are logged instead of drawn)
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Pause between frames in milliseconds (overrides config)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Points per sample grid (overrides config)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Wait for user action before starting playback (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub wait_user_start: Option<bool>,

    /// Keep the final chart open after playback (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub wait_user_exit: Option<bool>,
}

impl Args {
    /// Fold command-line overrides into a loaded config.
    pub fn apply(&self, mut cfg: AppConfig) -> AppConfig {
        if let Some(ms) = self.interval_ms {
            cfg.playback.interval_ms = ms;
        }
        if let Some(n) = self.samples {
            cfg.grid.samples = n;
        }
        if let Some(v) = self.wait_user_start {
            cfg.playback.wait_user_start = v;
        }
        if let Some(v) = self.wait_user_exit {
            cfg.playback.wait_user_exit = v;
        }
        cfg
    }
}
