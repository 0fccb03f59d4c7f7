//! Blocking host: step, log, sleep. Frame N is fully rendered before frame
//! N+1 starts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::info;

use crate::sweep::{Animation, SweepError};

/// Play `anim` to the end (or until `stop` is raised). Returns the number of
/// ticks played.
pub fn run(
    anim: &mut dyn Animation,
    interval: Duration,
    stop: &AtomicBool,
) -> Result<usize, SweepError> {
    info!(
        "Playing {} ({} frames, {:?} apart)",
        anim.title(),
        anim.frame_count(),
        interval
    );
    let mut ticks = 0;
    loop {
        if stop.load(Ordering::SeqCst) {
            info!("Stop requested after {ticks} frames.");
            break;
        }
        let Some(report) = anim.step()? else {
            break;
        };
        for frame in &report.frames {
            info!(
                "[{}/{}] {}: peak {:.4} at x={:.3}, area {:.4}",
                report.index + 1,
                anim.frame_count(),
                frame.label,
                frame.stats.peak_y,
                frame.stats.peak_x,
                frame.stats.area
            );
        }
        ticks += 1;
        if ticks < anim.frame_count() && !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    if anim.is_finished() {
        for surface in anim.surfaces() {
            info!(
                "{}: {} lines on canvas, legend {:?}",
                surface.title,
                surface.lines().len(),
                surface
                    .legend()
                    .entries()
                    .iter()
                    .map(|e| e.text.as_str())
                    .collect::<Vec<_>>()
            );
        }
    }
    Ok(ticks)
}
