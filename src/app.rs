use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::config::{PlaybackConfig, WindowConfig};
use crate::sweep::{Animation, SweepError};
use crate::ui::viewdata::{PlaybackMeta, PlaybackState, UiAction};

/// Longest gap between repaints, so the stop flag is seen even when idle.
pub const IDLE_POLL: Duration = Duration::from_millis(50);

/// Slot the GUI host leaves a frame error in for `main` to report.
pub type FailureSlot = Arc<Mutex<Option<SweepError>>>;

/// eframe host. The animation is stepped from `update` whenever the
/// interval has elapsed; `update` itself never sleeps.
pub struct App {
    anim: Box<dyn Animation>,
    playback: PlaybackConfig,
    meta: PlaybackMeta,
    next_due: Option<Instant>,
    failure: FailureSlot,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        anim: Box<dyn Animation>,
        playback: PlaybackConfig,
        window: &WindowConfig,
        failure: FailureSlot,
        exiting: Arc<AtomicBool>,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(window.pixels_per_point);
        Self::with_animation(anim, playback, failure, exiting)
    }

    pub fn with_animation(
        anim: Box<dyn Animation>,
        playback: PlaybackConfig,
        failure: FailureSlot,
        exiting: Arc<AtomicBool>,
    ) -> Self {
        let state = if playback.wait_user_start {
            PlaybackState::NotStarted
        } else {
            PlaybackState::Playing
        };
        let meta = PlaybackMeta {
            frames_done: 0,
            frame_count: anim.frame_count(),
            interval_ms: playback.interval_ms,
            state,
        };
        Self {
            anim,
            playback,
            meta,
            next_due: None,
            failure,
            exiting,
        }
    }

    pub fn meta(&self) -> &PlaybackMeta {
        &self.meta
    }

    pub fn animation(&self) -> &dyn Animation {
        self.anim.as_ref()
    }

    pub fn start(&mut self) {
        if self.meta.state == PlaybackState::NotStarted {
            info!("Playback started.");
            self.meta.state = PlaybackState::Playing;
        }
    }

    /// Delay before the next `update`, in every playback state.
    pub fn next_repaint(&self, wait: Option<Duration>) -> Duration {
        match wait {
            Some(wait) => wait.min(IDLE_POLL),
            None if self.meta.state == PlaybackState::Playing => Duration::ZERO,
            None => IDLE_POLL,
        }
    }

    /// Step if a frame is due. Returns how long until the next one.
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        if self.meta.state != PlaybackState::Playing {
            return None;
        }
        if let Some(due) = self.next_due {
            if now < due {
                return Some(due - now);
            }
        }

        match self.anim.step() {
            Ok(Some(report)) => {
                for frame in &report.frames {
                    debug!(
                        "frame {} {}: peak {:.4}, area {:.4}",
                        report.index, frame.label, frame.stats.peak_y, frame.stats.area
                    );
                }
                self.meta.frames_done = self.anim.frames_done();
                let interval = self.playback.interval();
                self.next_due = Some(now + interval);
                Some(interval)
            }
            Ok(None) => {
                info!("Playback finished after {} frames.", self.meta.frames_done);
                self.meta.state = PlaybackState::Finished;
                None
            }
            Err(err) => {
                error!("Frame {} failed: {err}", self.meta.frames_done);
                self.meta.state = PlaybackState::Failed(err.to_string());
                if let Ok(mut slot) = self.failure.lock() {
                    *slot = Some(err);
                }
                None
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            info!("SIGINT received: closing window.");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let wait = self.advance(Instant::now());

        let action = crate::ui::windows::main_window(ctx, self.anim.as_ref(), &self.meta);
        match action {
            UiAction::Start => self.start(),
            UiAction::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            UiAction::None => {}
        }

        match &self.meta.state {
            PlaybackState::Finished if !self.playback.wait_user_exit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            PlaybackState::Failed(_) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            _ => {}
        }

        ctx.request_repaint_after(self.next_repaint(wait));
    }
}
