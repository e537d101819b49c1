//! Embed frame setup and responsive surface selection

use crate::model::{EmbedFrame, Page, Surface, Tab, EMBED_FRAME_ID};
use super::PlaybackController;

/// Panels that only exist in the mobile layout
const MOBILE_ONLY_TABS: [Tab; 2] = [Tab::Following, Tab::Skills];

impl<P: Page + 'static> PlaybackController<P> {
    /// Return the hidden embed frame, inserting it on first use.
    pub(crate) async fn ensure_embed_frame(&self, playlist_url: &str) -> EmbedFrame {
        let mut page = self.page.lock().await;
        if let Some(frame) = page.embed_frame(EMBED_FRAME_ID) {
            tracing::debug!(frame = %frame.id, "Reusing existing embed frame");
            return frame;
        }

        let frame = EmbedFrame {
            id: EMBED_FRAME_ID.to_string(),
            src: self.config.embed_src(playlist_url),
            hidden: true,
        };
        tracing::debug!(src = %frame.src, "Inserting embed frame");
        page.insert_embed_frame(frame.clone());
        frame
    }

    /// Show the surface matching the viewport width and hide the other.
    ///
    /// Switching to desktop while a mobile-only panel is open sends the page
    /// back to "about".
    pub async fn show_correct_surface(&self) -> Surface {
        let mut page = self.page.lock().await;
        let width = page.viewport_width();
        let selected = Surface::for_viewport(width, self.config.desktop_breakpoint_px);

        for surface in Surface::ALL {
            let root = surface.ids().root;
            if page.contains(root) {
                page.set_displayed(root, surface == selected);
            }
        }

        let mobile_panel_open = selected == Surface::Desktop
            && MOBILE_ONLY_TABS
                .iter()
                .any(|tab| page.is_displayed(tab.content_id()) == Some(true));
        drop(page);

        tracing::trace!(width, ?selected, "Surface selected");
        if mobile_panel_open {
            tracing::debug!("Mobile-only panel open on desktop, returning to about");
            self.navigator.show_tab(Tab::About);
        }
        selected
    }
}
