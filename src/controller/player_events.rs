//! Widget event listener

use crate::model::Page;
use crate::widget::{WidgetEvent, WidgetEventReceiver};
use super::PlaybackController;

impl<P: Page + 'static> PlaybackController<P> {
    /// Consume the widget's event stream for the rest of the program,
    /// handling events one at a time in delivery order.
    pub(crate) fn start_widget_event_listener(&self, mut events: WidgetEventReceiver) {
        let controller = self.clone();
        tracing::info!("Starting widget event listener");

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                controller.handle_widget_event(event).await;
            }
            tracing::debug!("Widget event stream closed");
        });
    }

    pub async fn handle_widget_event(&self, event: WidgetEvent) {
        match event {
            WidgetEvent::Ready => {
                tracing::info!("WidgetEvent::Ready");
                self.state.lock().await.is_ready = true;
                self.update_track_info().await;
            }
            WidgetEvent::Play => {
                tracing::debug!("WidgetEvent::Play");
                let skipping = self.state.lock().await.is_skipping;
                if skipping {
                    // the widget resumes a skipped-to track mid-way; rewind it
                    let controller = self.clone();
                    let delay = self.config.skip_seek_delay;
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        if let Some(widget) = controller.widget().await {
                            widget.seek_to(0).await;
                        }
                        controller.state.lock().await.is_skipping = false;
                    });
                }
                self.refresh_play_button().await;
                self.update_track_info().await;
                self.start_progress().await;
            }
            WidgetEvent::Pause => {
                tracing::debug!("WidgetEvent::Pause");
                self.refresh_play_button().await;
                self.stop_progress(false).await;
            }
            WidgetEvent::Finish => {
                tracing::info!("WidgetEvent::Finish, looping to the first track");
                self.stop_progress(true).await;
                if let Some(widget) = self.widget().await {
                    widget.skip(0).await;
                    widget.play().await;
                }
            }
            WidgetEvent::PlayProgress {
                current_position,
                duration,
            } => {
                tracing::trace!(current_position, ?duration, "WidgetEvent::PlayProgress");
                self.update_progress(current_position, duration).await;
            }
        }
    }
}
