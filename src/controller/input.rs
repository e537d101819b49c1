//! Page event handling

use crate::model::{Page, PageEvent, Surface};
use super::PlaybackController;

const TOGGLE_KEY: &str = "Space";

/// What a bound control does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    TogglePlayback,
    PreviousTrack,
    NextTrack,
    OpenExternal,
}

impl<P: Page + 'static> PlaybackController<P> {
    /// Bind the transport controls of both surfaces and the toggle key.
    /// Controls missing from the page are skipped.
    pub(crate) async fn bind_ui(&self) {
        let present: Vec<(&'static str, UiAction)> = {
            let page = self.page.lock().await;
            Surface::ALL
                .into_iter()
                .flat_map(|surface| {
                    let ids = surface.ids();
                    [
                        (ids.play, UiAction::TogglePlayback),
                        (ids.prev, UiAction::PreviousTrack),
                        (ids.next, UiAction::NextTrack),
                    ]
                })
                .filter(|(id, _)| page.contains(id))
                .collect()
        };

        let mut state = self.state.lock().await;
        for (id, action) in present {
            state.bindings.insert(id.to_string(), action);
        }
        state.keys_bound = true;
        tracing::debug!(bindings = state.bindings.len(), "UI controls bound");
    }

    /// Dispatch a page event. Returns `true` when the event's default action
    /// should be prevented.
    pub async fn handle_page_event(&self, event: PageEvent) -> bool {
        match event {
            PageEvent::Click { id } => {
                let action = self.state.lock().await.bindings.get(&id).copied();
                match action {
                    Some(action) => {
                        tracing::debug!(id = %id, ?action, "Control clicked");
                        self.perform(action).await;
                    }
                    None => tracing::trace!(id = %id, "Click on unbound element"),
                }
                false
            }
            PageEvent::KeyDown {
                code,
                in_text_field,
            } => {
                let keys_bound = self.state.lock().await.keys_bound;
                if keys_bound && code == TOGGLE_KEY && !in_text_field {
                    self.toggle_playback().await;
                    return true;
                }
                false
            }
            PageEvent::Resize => {
                let resize_bound = self.state.lock().await.resize_bound;
                if resize_bound {
                    self.show_correct_surface().await;
                }
                false
            }
        }
    }

    async fn perform(&self, action: UiAction) {
        match action {
            UiAction::TogglePlayback => self.toggle_playback().await,
            UiAction::PreviousTrack => self.previous_track().await,
            UiAction::NextTrack => self.next_track().await,
            UiAction::OpenExternal => {
                let url = self.state.lock().await.open_url.clone();
                if let Some(url) = url {
                    tracing::info!(url = %url, "Opening track externally");
                    self.page.lock().await.open_external(&url);
                }
            }
        }
    }
}
