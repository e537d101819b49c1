//! Test doubles for the widget and the tab navigator

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::controller::TabNavigator;
use crate::model::{EmbedFrame, Tab, Track, TrackUser};
use crate::widget::{Widget, WidgetEvent, WidgetEventReceiver, WidgetFactory};

/// Commands received by [`RecordingWidget`], in call order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    SeekTo(u64),
    Skip(usize),
    Next,
    Prev,
}

#[derive(Default)]
pub struct FakeState {
    pub commands: Vec<Command>,
    pub paused: bool,
    pub position: u64,
    pub duration: u64,
    pub tracks: Vec<Track>,
    pub index: Option<usize>,
}

/// Widget that records commands and answers queries from canned state.
/// Commands never change the canned state.
#[derive(Default)]
pub struct RecordingWidget {
    state: Mutex<FakeState>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<WidgetEvent>>>,
}

impl RecordingWidget {
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        let widget = Self::default();
        {
            let mut state = widget.state();
            state.paused = true;
            state.index = (!tracks.is_empty()).then_some(0);
            state.duration = tracks.first().map(|track| track.duration).unwrap_or(0);
            state.tracks = tracks;
        }
        widget
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn commands(&self) -> Vec<Command> {
        self.state().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state().commands.clear();
    }

    pub fn set_current(&self, index: usize) {
        let mut state = self.state();
        state.index = Some(index);
        state.duration = state.tracks.get(index).map(|track| track.duration).unwrap_or(0);
    }

    pub fn emit(&self, event: WidgetEvent) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn record(&self, command: Command) {
        self.state().commands.push(command);
    }
}

#[async_trait]
impl Widget for RecordingWidget {
    fn subscribe(&self) -> WidgetEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    async fn play(&self) {
        self.record(Command::Play);
    }

    async fn pause(&self) {
        self.record(Command::Pause);
    }

    async fn toggle(&self) {
        self.record(Command::Toggle);
    }

    async fn seek_to(&self, position_ms: u64) {
        self.record(Command::SeekTo(position_ms));
    }

    async fn skip(&self, index: usize) {
        self.record(Command::Skip(index));
    }

    async fn next(&self) {
        self.record(Command::Next);
    }

    async fn prev(&self) {
        self.record(Command::Prev);
    }

    async fn is_paused(&self) -> bool {
        self.state().paused
    }

    async fn position(&self) -> u64 {
        self.state().position
    }

    async fn duration(&self) -> u64 {
        self.state().duration
    }

    async fn current_sound(&self) -> Option<Track> {
        let state = self.state();
        state.index.and_then(|index| state.tracks.get(index).cloned())
    }

    async fn sounds(&self) -> Vec<Track> {
        self.state().tracks.clone()
    }

    async fn current_sound_index(&self) -> Option<usize> {
        self.state().index
    }
}

/// Hands out one shared [`RecordingWidget`] and remembers wrapped frames
pub struct RecordingFactory {
    pub widget: Arc<RecordingWidget>,
    pub frames: Mutex<Vec<EmbedFrame>>,
}

impl RecordingFactory {
    pub fn new(widget: Arc<RecordingWidget>) -> Self {
        Self {
            widget,
            frames: Mutex::new(Vec::new()),
        }
    }
}

impl WidgetFactory for RecordingFactory {
    fn wrap(&self, frame: &EmbedFrame) -> Arc<dyn Widget> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame.clone());
        self.widget.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub tabs: Mutex<Vec<Tab>>,
}

impl RecordingNavigator {
    pub fn tabs(&self) -> Vec<Tab> {
        self.tabs.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl TabNavigator for RecordingNavigator {
    fn show_tab(&self, tab: Tab) {
        self.tabs.lock().unwrap_or_else(PoisonError::into_inner).push(tab);
    }
}

pub fn track(id: u64, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        permalink_url: format!("https://soundcloud.com/tester/track-{id}"),
        user: TrackUser {
            username: "tester".to_string(),
        },
        duration: 200_000,
    }
}

/// `count` short-titled tracks with ids starting at 1
pub fn playlist(count: u64) -> Vec<Track> {
    (1..=count).map(|id| track(id, &format!("song {id}"))).collect()
}
