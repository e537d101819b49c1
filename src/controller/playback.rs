//! Transport controls and progress polling

use tokio::time::{interval_at, Instant};

use crate::model::{format_duration, Page, Track};
use super::PlaybackController;

impl<P: Page + 'static> PlaybackController<P> {
    /// Pause when playing; when paused, rewind to the start and resume.
    pub async fn toggle_playback(&self) {
        let Some(widget) = self.widget().await else {
            tracing::debug!("Toggle ignored, widget not bound");
            return;
        };
        let paused = widget.is_paused().await;
        tracing::debug!(paused, "Toggling playback");
        if paused {
            widget.seek_to(0).await;
        }
        widget.toggle().await;
    }

    /// Advance one track, looping back to the first after the last one.
    pub async fn next_track(&self) {
        let Some(widget) = self.widget().await else {
            return;
        };
        let sounds = widget.sounds().await;
        let index = widget.current_sound_index().await;
        let is_last = index.is_some() && index == sounds.len().checked_sub(1);

        self.state.lock().await.is_skipping = true;
        if is_last {
            tracing::info!(tracks = sounds.len(), "Next on the last track, looping to the first");
            widget.skip(0).await;
            widget.play().await;
        } else {
            tracing::debug!(?index, "Skipping to next track");
            widget.next().await;
        }
    }

    /// Go back one track. The first track is left to the widget's own
    /// handling.
    pub async fn previous_track(&self) {
        let Some(widget) = self.widget().await else {
            return;
        };
        tracing::debug!("Skipping to previous track");
        self.state.lock().await.is_skipping = true;
        widget.prev().await;
    }

    /// Start the once-per-period progress poll. No-op when already running.
    pub async fn start_progress(&self) {
        let mut state = self.state.lock().await;
        if state.progress_task.is_some() {
            return;
        }

        let controller = self.clone();
        let period = self.config.poll_interval;
        state.progress_task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                controller.poll_progress().await;
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, "Progress polling started");
    }

    /// Stop polling, optionally resetting both bars to zero.
    pub async fn stop_progress(&self, reset: bool) {
        let task = self.state.lock().await.progress_task.take();
        if let Some(task) = task {
            task.abort();
            tracing::debug!("Progress polling stopped");
        }
        if reset {
            self.set_progress(0.0).await;
            self.set_progress_time(0, 0).await;
        }
    }

    async fn poll_progress(&self) {
        let Some(widget) = self.widget().await else {
            return;
        };
        let (position, duration) = futures::join!(widget.position(), widget.duration());
        if duration == 0 {
            return;
        }
        self.set_progress(position as f64 / duration as f64).await;
        self.set_progress_time(position, duration).await;
    }

    /// Apply a progress report pushed by the widget
    pub(crate) async fn update_progress(&self, position: u64, duration: Option<u64>) {
        match duration {
            Some(duration) if duration > 0 => {
                self.set_progress(position as f64 / duration as f64).await;
                self.set_progress_time(position, duration).await;
            }
            _ => {}
        }
    }

    /// Log the playlist the widget loaded
    pub async fn playlist_info(&self) -> Option<Vec<Track>> {
        let widget = self.widget().await?;
        let sounds = widget.sounds().await;
        tracing::info!(
            tracks = sounds.len(),
            titles = ?sounds.iter().map(|track| track.title.as_str()).collect::<Vec<_>>(),
            durations = ?sounds.iter().map(|track| format_duration(track.duration)).collect::<Vec<_>>(),
            "Playlist loaded by widget"
        );
        Some(sounds)
    }
}
