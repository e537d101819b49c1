//! Track info, marquee titles, play icons and progress bars

use crate::model::{
    format_duration, MarqueeAnimation, MarqueeKeyframes, Page, Surface, Track, TrackDisplay,
    PAUSE_ICON, PLAY_ICON, SCROLLING_CLASS, TITLE_TEXT_STYLE,
};
use super::{PlaybackController, UiAction};

impl<P: Page + 'static> PlaybackController<P> {
    /// Fetch the widget's current track and show it unless it is already
    /// the displayed one.
    pub async fn update_track_info(&self) {
        let Some(widget) = self.widget().await else {
            return;
        };
        let Some(sound) = widget.current_sound().await else {
            return;
        };

        let mut state = self.state.lock().await;
        if state
            .current_track
            .as_ref()
            .is_some_and(|current| current.is_same_track(&sound))
        {
            return;
        }
        state.current_track = Some(sound.clone());
        drop(state);

        tracing::info!(
            track_id = sound.id,
            title = %sound.title,
            artist = %sound.artist(),
            "Displaying track"
        );
        self.display_current_track(&sound).await;
    }

    async fn display_current_track(&self, sound: &Track) {
        for surface in Surface::ALL {
            self.update_track_display(surface, sound).await;
        }

        let open_ids: Vec<&str> = {
            let page = self.page.lock().await;
            Surface::ALL
                .into_iter()
                .map(|surface| surface.ids().open)
                .filter(|id| page.contains(id))
                .collect()
        };
        let mut state = self.state.lock().await;
        state.open_url = Some(sound.permalink_url.clone());
        for id in open_ids {
            state.bindings.insert(id.to_string(), UiAction::OpenExternal);
        }
    }

    async fn update_track_display(&self, surface: Surface, sound: &Track) {
        let id = surface.ids().track;
        {
            let mut page = self.page.lock().await;
            if !page.contains(id) {
                return;
            }
            page.set_track_display(id, TrackDisplay::for_track(sound));
            page.remove_class(id, SCROLLING_CLASS);
        }

        let controller = self.clone();
        let sound = sound.clone();
        let delay = self.config.measure_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.apply_title_overflow(surface, &sound).await;
        });
    }

    /// Switch a track region to a scrolling title when the title is wider
    /// than its container.
    async fn apply_title_overflow(&self, surface: Surface, sound: &Track) {
        let still_current = self
            .state
            .lock()
            .await
            .current_track
            .as_ref()
            .is_some_and(|current| current.is_same_track(sound));
        if !still_current {
            return;
        }

        let id = surface.ids().track;
        let container_width = surface.container_width();
        let animation = {
            let mut page = self.page.lock().await;
            if !page.contains(id) {
                return;
            }
            let title_width = page.measure_text(&sound.title, TITLE_TEXT_STYLE);
            let Some(animation) = MarqueeAnimation::for_title(title_width, container_width) else {
                return;
            };
            page.set_track_display(id, TrackDisplay::scrolling(sound, animation));
            page.add_class(id, SCROLLING_CLASS);
            animation
        };

        tracing::debug!(
            ?surface,
            overflow_px = animation.overflow_px,
            duration_ms = animation.duration.as_millis() as u64,
            "Title overflows, scrolling"
        );
        self.add_marquee_keyframes(container_width).await;
    }

    /// Register the keyframes for a container width the first time it is seen
    async fn add_marquee_keyframes(&self, container_width: u32) {
        let newly_added = self
            .state
            .lock()
            .await
            .registered_keyframes
            .insert(container_width);
        if newly_added {
            let keyframes = MarqueeKeyframes::new(container_width);
            tracing::debug!(
                name = %keyframes.name(),
                css = %keyframes.css(),
                "Registering marquee keyframes"
            );
            self.page.lock().await.register_keyframes(keyframes);
        }
    }

    pub async fn refresh_play_button(&self) {
        let Some(widget) = self.widget().await else {
            return;
        };
        let icon = if widget.is_paused().await {
            PLAY_ICON
        } else {
            PAUSE_ICON
        };
        let mut page = self.page.lock().await;
        for surface in Surface::ALL {
            page.set_text(surface.ids().play, icon);
        }
    }

    /// Write the `m:ss / m:ss` time label of both progress bars. A zero
    /// `duration_ms` clears it.
    pub(crate) async fn set_progress_time(&self, position_ms: u64, duration_ms: u64) {
        let label = if duration_ms == 0 {
            String::new()
        } else {
            format!(
                "{} / {}",
                format_duration(position_ms.min(duration_ms)),
                format_duration(duration_ms)
            )
        };
        let mut page = self.page.lock().await;
        for surface in Surface::ALL {
            page.set_text(surface.ids().progress, &label);
        }
    }

    /// Set both progress bars to `ratio`, clamped to 0..=1.
    pub async fn set_progress(&self, ratio: f64) {
        if ratio.is_nan() {
            return;
        }
        let percent = (ratio * 100.0).clamp(0.0, 100.0);
        let mut page = self.page.lock().await;
        for surface in Surface::ALL {
            page.set_progress(surface.ids().progress, percent);
        }
    }
}
