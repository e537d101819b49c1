//! Simulated widget driven by a playback clock
//!
//! Stands in for the embedded player when no browser is around: it keeps a
//! playlist and a position clock, and emits the same events the real widget
//! does. No audio is produced.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::model::{EmbedFrame, Track};
use super::{Widget, WidgetEvent, WidgetEventReceiver, WidgetFactory};

/// Timing of the simulated event stream
#[derive(Clone, Copy, Debug)]
pub struct SimulationTiming {
    /// Delay between wrapping the frame and `Ready`
    pub ready_delay: Duration,
    /// Period of `PlayProgress` events while playing
    pub progress_interval: Duration,
}

impl Default for SimulationTiming {
    fn default() -> Self {
        Self {
            ready_delay: Duration::from_millis(300),
            progress_interval: Duration::from_millis(250),
        }
    }
}

struct SimState {
    tracks: Vec<Track>,
    index: usize,
    paused: bool,
    base_position_ms: u64,
    resumed_at: Option<Instant>,
    subscribers: Vec<mpsc::UnboundedSender<WidgetEvent>>,
}

impl SimState {
    fn duration(&self) -> u64 {
        self.tracks.get(self.index).map(|track| track.duration).unwrap_or(0)
    }

    fn position(&self, now: Instant) -> u64 {
        let elapsed = self
            .resumed_at
            .map(|resumed| now.saturating_duration_since(resumed).as_millis() as u64)
            .unwrap_or(0);
        self.base_position_ms.saturating_add(elapsed).min(self.duration())
    }

    fn emit(&mut self, event: WidgetEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn start(&mut self, now: Instant) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.resumed_at = Some(now);
        self.emit(WidgetEvent::Play);
    }

    fn stop(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        self.base_position_ms = self.position(now);
        self.resumed_at = None;
        self.paused = true;
        self.emit(WidgetEvent::Pause);
    }

    /// Load a track from the start and play it
    fn load(&mut self, index: usize, now: Instant) {
        self.index = index;
        self.base_position_ms = 0;
        if self.paused {
            self.start(now);
        } else {
            self.resumed_at = Some(now);
            self.emit(WidgetEvent::Play);
        }
    }

    fn tick(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        let position = self.position(now);
        let duration = self.duration();
        // a track without a duration has nothing left to play
        if position >= duration {
            self.base_position_ms = duration;
            self.resumed_at = None;
            self.paused = true;
            tracing::debug!(index = self.index, "Simulated track finished");
            self.emit(WidgetEvent::Finish);
        } else {
            self.emit(WidgetEvent::PlayProgress {
                current_position: position,
                duration: Some(duration),
            });
        }
    }
}

pub struct SimulatedWidget {
    state: Arc<Mutex<SimState>>,
    clock_task: JoinHandle<()>,
}

impl SimulatedWidget {
    /// Create the widget and start its clock. Must be called inside a tokio
    /// runtime.
    pub fn spawn(tracks: Vec<Track>, timing: SimulationTiming) -> Self {
        let state = Arc::new(Mutex::new(SimState {
            tracks,
            index: 0,
            paused: true,
            base_position_ms: 0,
            resumed_at: None,
            subscribers: Vec::new(),
        }));

        let clock_state = state.clone();
        let clock_task = tokio::spawn(async move {
            tokio::time::sleep(timing.ready_delay).await;
            lock(&clock_state).emit(WidgetEvent::Ready);
            tracing::debug!("Simulated widget ready");

            loop {
                tokio::time::sleep(timing.progress_interval).await;
                lock(&clock_state).tick(Instant::now());
            }
        });

        Self { state, clock_task }
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<SimState>) -> MutexGuard<'_, SimState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Drop for SimulatedWidget {
    fn drop(&mut self) {
        self.clock_task.abort();
    }
}

#[async_trait]
impl Widget for SimulatedWidget {
    fn subscribe(&self) -> WidgetEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state().subscribers.push(tx);
        rx
    }

    async fn play(&self) {
        self.state().start(Instant::now());
    }

    async fn pause(&self) {
        self.state().stop(Instant::now());
    }

    async fn toggle(&self) {
        let now = Instant::now();
        let mut state = self.state();
        if state.paused {
            state.start(now);
        } else {
            state.stop(now);
        }
    }

    async fn seek_to(&self, position_ms: u64) {
        let now = Instant::now();
        let mut state = self.state();
        state.base_position_ms = position_ms.min(state.duration());
        if !state.paused {
            state.resumed_at = Some(now);
        }
    }

    async fn skip(&self, index: usize) {
        let mut state = self.state();
        if index < state.tracks.len() {
            state.load(index, Instant::now());
        }
    }

    async fn next(&self) {
        let mut state = self.state();
        let next = state.index + 1;
        if next < state.tracks.len() {
            state.load(next, Instant::now());
        }
    }

    async fn prev(&self) {
        let now = Instant::now();
        let mut state = self.state();
        match state.index.checked_sub(1) {
            Some(previous) => state.load(previous, now),
            None => {
                state.base_position_ms = 0;
                if !state.paused {
                    state.resumed_at = Some(now);
                }
            }
        }
    }

    async fn is_paused(&self) -> bool {
        self.state().paused
    }

    async fn position(&self) -> u64 {
        self.state().position(Instant::now())
    }

    async fn duration(&self) -> u64 {
        self.state().duration()
    }

    async fn current_sound(&self) -> Option<Track> {
        let state = self.state();
        state.tracks.get(state.index).cloned()
    }

    async fn sounds(&self) -> Vec<Track> {
        self.state().tracks.clone()
    }

    async fn current_sound_index(&self) -> Option<usize> {
        let state = self.state();
        (state.index < state.tracks.len()).then_some(state.index)
    }
}

/// Wraps embed frames in simulated widgets playing a fixed playlist
pub struct SimulatedWidgetFactory {
    tracks: Vec<Track>,
    timing: SimulationTiming,
}

impl SimulatedWidgetFactory {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self::with_timing(tracks, SimulationTiming::default())
    }

    pub fn with_timing(tracks: Vec<Track>, timing: SimulationTiming) -> Self {
        Self { tracks, timing }
    }
}

impl WidgetFactory for SimulatedWidgetFactory {
    fn wrap(&self, frame: &EmbedFrame) -> Arc<dyn Widget> {
        tracing::info!(frame = %frame.id, src = %frame.src, tracks = self.tracks.len(), "Wrapping embed frame in simulated widget");
        Arc::new(SimulatedWidget::spawn(self.tracks.clone(), self.timing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackUser;

    fn track(id: u64, duration: u64) -> Track {
        Track {
            id,
            title: format!("track {id}"),
            permalink_url: format!("https://soundcloud.com/test/track-{id}"),
            user: TrackUser { username: "test".into() },
            duration,
        }
    }

    fn drain(rx: &mut WidgetEventReceiver) -> Vec<WidgetEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn ready_then_progress_while_playing() {
        let widget = SimulatedWidget::spawn(vec![track(1, 60_000)], SimulationTiming::default());
        let mut rx = widget.subscribe();

        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(drain(&mut rx), vec![WidgetEvent::Ready]);
        assert!(widget.is_paused().await);

        widget.play().await;
        assert_eq!(drain(&mut rx), vec![WidgetEvent::Play]);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let events = drain(&mut rx);
        assert!(!events.is_empty());
        assert!(events.iter().all(|event| matches!(
            event,
            WidgetEvent::PlayProgress { duration: Some(60_000), .. }
        )));
        let position = widget.position().await;
        assert!((900..=1100).contains(&position), "position {position}");
    }

    #[tokio::test(start_paused = true)]
    async fn finishes_at_the_end_of_the_track() {
        let widget = SimulatedWidget::spawn(vec![track(1, 1_000), track(2, 5_000)], SimulationTiming::default());
        let mut rx = widget.subscribe();
        widget.play().await;

        tokio::time::sleep(Duration::from_millis(1_600)).await;
        let events = drain(&mut rx);
        assert_eq!(
            events.iter().filter(|event| **event == WidgetEvent::Finish).count(),
            1
        );
        assert!(widget.is_paused().await);
        assert_eq!(widget.position().await, 1_000);
        assert_eq!(widget.current_sound_index().await, Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn track_without_duration_finishes_on_the_next_tick() {
        let widget = SimulatedWidget::spawn(vec![track(1, 0), track(2, 0)], SimulationTiming::default());
        let mut rx = widget.subscribe();
        widget.play().await;

        tokio::time::sleep(Duration::from_millis(600)).await;
        let events = drain(&mut rx);
        assert_eq!(events.first(), Some(&WidgetEvent::Play));
        assert!(events.contains(&WidgetEvent::Finish));
        assert!(!events.iter().any(|event| matches!(event, WidgetEvent::PlayProgress { .. })));
        assert!(widget.is_paused().await);

        // looping back keeps finishing instead of stalling
        widget.skip(0).await;
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(drain(&mut rx).contains(&WidgetEvent::Finish));
    }

    #[tokio::test(start_paused = true)]
    async fn skipping_loads_and_plays_from_the_start() {
        let widget = SimulatedWidget::spawn(
            vec![track(1, 10_000), track(2, 10_000), track(3, 10_000)],
            SimulationTiming::default(),
        );
        let mut rx = widget.subscribe();

        widget.skip(2).await;
        assert_eq!(widget.current_sound_index().await, Some(2));
        assert!(!widget.is_paused().await);
        assert!(drain(&mut rx).contains(&WidgetEvent::Play));

        // next at the end of the list stays put
        widget.next().await;
        assert_eq!(widget.current_sound().await.map(|t| t.id), Some(3));

        widget.skip(7).await;
        assert_eq!(widget.current_sound_index().await, Some(2));

        widget.prev().await;
        assert_eq!(widget.current_sound_index().await, Some(1));
        assert_eq!(widget.position().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_and_seek() {
        let widget = SimulatedWidget::spawn(vec![track(1, 10_000)], SimulationTiming::default());
        widget.toggle().await;
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        widget.toggle().await;
        assert!(widget.is_paused().await);
        let paused_at = widget.position().await;
        assert!(paused_at >= 1_900);

        widget.seek_to(0).await;
        assert_eq!(widget.position().await, 0);
        widget.seek_to(99_000).await;
        assert_eq!(widget.position().await, 10_000);
    }
}
