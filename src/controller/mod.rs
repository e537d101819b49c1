//! Controller module - Playback synchronization
//!
//! This module contains the controller that keeps the mini-player surfaces in
//! sync with the embedded widget and turns page gestures into widget
//! commands. It is organized into submodules by responsibility:
//!
//! - `input`: Page event handling and control bindings
//! - `layout`: Embed frame setup and responsive surface selection
//! - `playback`: Transport controls and progress polling
//! - `display`: Track info, marquee titles, icons and progress bars
//! - `player_events`: Widget event listener
//! - `navigation`: Tab navigation collaborator

mod input;
mod layout;
mod playback;
mod display;
mod player_events;
mod navigation;


use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::PlayerConfig;
use crate::model::{Page, Track};
use crate::widget::{Widget, WidgetFactory};

pub use input::UiAction;
pub use navigation::{switch_tab, PageTabs, TabNavigator};

/// Mutable controller state. Every field is only touched while the
/// controller's state lock is held.
#[derive(Default)]
pub(crate) struct ControllerState {
    pub(crate) widget: Option<Arc<dyn Widget>>,
    pub(crate) current_track: Option<Track>,
    pub(crate) is_ready: bool,
    pub(crate) progress_task: Option<JoinHandle<()>>,
    /// Set by next/previous until the following `Play` rewinds the track
    pub(crate) is_skipping: bool,
    pub(crate) registered_keyframes: HashSet<u32>,
    pub(crate) bindings: HashMap<String, UiAction>,
    pub(crate) open_url: Option<String>,
    pub(crate) resize_bound: bool,
    pub(crate) keys_bound: bool,
}

pub struct PlaybackController<P> {
    pub(crate) page: Arc<Mutex<P>>,
    pub(crate) state: Arc<Mutex<ControllerState>>,
    pub(crate) navigator: Arc<dyn TabNavigator>,
    factory: Arc<dyn WidgetFactory>,
    pub(crate) config: Arc<PlayerConfig>,
}

impl<P> Clone for PlaybackController<P> {
    fn clone(&self) -> Self {
        Self {
            page: self.page.clone(),
            state: self.state.clone(),
            navigator: self.navigator.clone(),
            factory: self.factory.clone(),
            config: self.config.clone(),
        }
    }
}

impl<P: Page + 'static> PlaybackController<P> {
    pub fn new(
        page: Arc<Mutex<P>>,
        factory: Arc<dyn WidgetFactory>,
        navigator: Arc<dyn TabNavigator>,
        config: PlayerConfig,
    ) -> Self {
        Self {
            page,
            state: Arc::new(Mutex::new(ControllerState::default())),
            navigator,
            factory,
            config: Arc::new(config),
        }
    }

    /// Embed the widget and wire it to the page.
    ///
    /// Reuses an existing embed frame, shows the surface matching the
    /// viewport, binds the widget's event stream and the page controls.
    pub async fn initialize(&self, playlist_url: &str) {
        let frame = self.ensure_embed_frame(playlist_url).await;

        self.show_correct_surface().await;
        self.state.lock().await.resize_bound = true;

        let widget = self.factory.wrap(&frame);
        let events = widget.subscribe();
        self.state.lock().await.widget = Some(widget);
        self.start_widget_event_listener(events);

        self.bind_ui().await;
        tracing::info!(frame = %frame.id, "Playback controller initialized");
    }

    /// The bound widget, if initialization has happened
    pub(crate) async fn widget(&self) -> Option<Arc<dyn Widget>> {
        self.state.lock().await.widget.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.state.lock().await.is_ready
    }

    /// Track currently shown on the surfaces
    pub async fn current_track(&self) -> Option<Track> {
        self.state.lock().await.current_track.clone()
    }

    pub async fn is_polling(&self) -> bool {
        self.state.lock().await.progress_task.is_some()
    }

    pub async fn is_skipping(&self) -> bool {
        self.state.lock().await.is_skipping
    }
}
