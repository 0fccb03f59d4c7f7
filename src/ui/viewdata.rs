#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    NotStarted,
    Playing,
    Finished,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackMeta {
    pub frames_done: usize,
    pub frame_count: usize,
    pub interval_ms: u64,
    pub state: PlaybackState,
}

impl PlaybackMeta {
    pub fn progress_text(&self) -> String {
        match &self.state {
            PlaybackState::NotStarted => format!("{} frames ready", self.frame_count),
            PlaybackState::Playing => format!(
                "frame {}/{} ({} ms)",
                self.frames_done, self.frame_count, self.interval_ms
            ),
            PlaybackState::Finished => format!("done, {} frames", self.frames_done),
            PlaybackState::Failed(msg) => format!("stopped: {msg}"),
        }
    }
}

/// What the user asked for in this repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    None,
    Start,
    Close,
}
