// Entry point: picks a density sweep and plays it in a window or headless.
use std::error::Error;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use densweep::app::{App, FailureSlot};
use densweep::cli::Args;
use densweep::config::AppConfig;
use densweep::headless;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = args.apply(AppConfig::load_or_default(&args.config));
    info!("Sweep {:?}, {} grid points", args.sweep, cfg.grid.samples);

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })?;

    let mut anim = args.sweep.build(cfg.grid.samples)?;

    if args.nogui {
        headless::run(anim.as_mut(), cfg.playback.interval(), &stop_flag)?;
        return Ok(());
    }

    let failure: FailureSlot = Arc::new(Mutex::new(None));
    let failure_for_app = failure.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.window.width, cfg.window.height]),
        ..Default::default()
    };
    let title = anim.title().to_string();

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(App::new(
                cc,
                anim,
                cfg.playback.clone(),
                &cfg.window,
                failure_for_app,
                stop_flag,
            )))
        }),
    )?;

    let err = failure.lock().ok().and_then(|mut slot| slot.take());
    match err {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
