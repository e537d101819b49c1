//! Embedded widget adapter
//!
//! The widget is the external player hosted inside the embed frame. The
//! controller only ever talks to it through [`Widget`]: commands are fire and
//! forget, and their effect is observed on the event stream returned by
//! [`Widget::subscribe`].

mod playlist;
mod simulated;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::model::{EmbedFrame, Track};

pub use playlist::{demo_playlist, load_playlist, parse_playlist, PlaylistError};
pub use simulated::{SimulatedWidget, SimulatedWidgetFactory, SimulationTiming};

/// Events emitted by the widget
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    Ready,
    Play,
    Pause,
    Finish,
    /// Periodic position report while playing
    PlayProgress {
        current_position: u64,
        duration: Option<u64>,
    },
}

pub type WidgetEventReceiver = mpsc::UnboundedReceiver<WidgetEvent>;

/// Command and query surface of the embedded widget.
///
/// Positions and durations are in milliseconds.
#[async_trait]
pub trait Widget: Send + Sync {
    /// Open a new, ordered stream of every event the widget emits from now on
    fn subscribe(&self) -> WidgetEventReceiver;

    async fn play(&self);
    async fn pause(&self);
    async fn toggle(&self);
    async fn seek_to(&self, position_ms: u64);
    async fn skip(&self, index: usize);
    async fn next(&self);
    async fn prev(&self);

    async fn is_paused(&self) -> bool;
    async fn position(&self) -> u64;
    async fn duration(&self) -> u64;
    async fn current_sound(&self) -> Option<Track>;
    async fn sounds(&self) -> Vec<Track>;
    async fn current_sound_index(&self) -> Option<usize>;
}

/// Builds a widget around an embed frame
pub trait WidgetFactory: Send + Sync {
    fn wrap(&self, frame: &EmbedFrame) -> Arc<dyn Widget>;
}
