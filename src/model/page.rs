//! Host page capabilities used by the controller

use super::marquee::{MarqueeAnimation, MarqueeKeyframes};
use super::track::Track;

/// Id of the hidden frame hosting the widget
pub const EMBED_FRAME_ID: &str = "hidden-sc-player";

/// Class carried by a track region while its title scrolls
pub const SCROLLING_CLASS: &str = "scrolling";

pub const PLAY_ICON: &str = "▶️";
pub const PAUSE_ICON: &str = "⏸️";

/// Font used to measure titles off-screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub bold: bool,
}

pub const TITLE_TEXT_STYLE: TextStyle = TextStyle {
    font_size_px: 11.0,
    bold: true,
};

/// Sandboxed frame the widget is loaded into
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedFrame {
    pub id: String,
    pub src: String,
    pub hidden: bool,
}

/// Content of a track-info region
#[derive(Clone, Debug, PartialEq)]
pub enum TrackDisplay {
    /// Bold title above the owning user's name
    Static { title: String, artist: String },
    /// Title scrolling horizontally above the owning user's name
    Marquee {
        title: String,
        artist: String,
        animation: MarqueeAnimation,
    },
}

impl TrackDisplay {
    pub fn for_track(track: &Track) -> Self {
        TrackDisplay::Static {
            title: track.title.clone(),
            artist: track.artist().to_string(),
        }
    }

    pub fn scrolling(track: &Track, animation: MarqueeAnimation) -> Self {
        TrackDisplay::Marquee {
            title: track.title.clone(),
            artist: track.artist().to_string(),
            animation,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TrackDisplay::Static { title, .. } | TrackDisplay::Marquee { title, .. } => title,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            TrackDisplay::Static { artist, .. } | TrackDisplay::Marquee { artist, .. } => artist,
        }
    }

    pub fn animation(&self) -> Option<&MarqueeAnimation> {
        match self {
            TrackDisplay::Marquee { animation, .. } => Some(animation),
            TrackDisplay::Static { .. } => None,
        }
    }
}

/// Events the host page forwards to the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Click { id: String },
    KeyDown { code: String, in_text_field: bool },
    Resize,
}

impl PageEvent {
    pub fn click(id: impl Into<String>) -> Self {
        PageEvent::Click { id: id.into() }
    }

    pub fn key(code: impl Into<String>) -> Self {
        PageEvent::KeyDown {
            code: code.into(),
            in_text_field: false,
        }
    }
}

/// DOM operations the controller relies on.
///
/// Every mutation addressed to an id the page does not contain is a silent
/// no-op, so callers may skip the existence check when nothing else depends
/// on it.
pub trait Page: Send + Sync {
    /// Current viewport width in logical pixels
    fn viewport_width(&self) -> u32;

    fn contains(&self, id: &str) -> bool;

    /// `None` when the element does not exist
    fn is_displayed(&self, id: &str) -> Option<bool>;

    fn set_displayed(&mut self, id: &str, displayed: bool);

    fn set_text(&mut self, id: &str, text: &str);

    fn set_track_display(&mut self, id: &str, display: TrackDisplay);

    /// Width of a progress bar in percent
    fn set_progress(&mut self, id: &str, percent: f64);

    fn add_class(&mut self, id: &str, class: &str);

    fn remove_class(&mut self, id: &str, class: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn embed_frame(&self, id: &str) -> Option<EmbedFrame>;

    fn insert_embed_frame(&mut self, frame: EmbedFrame);

    /// Rendered width of `text` laid out off-screen on a single line
    fn measure_text(&self, text: &str, style: TextStyle) -> f64;

    fn register_keyframes(&mut self, keyframes: MarqueeKeyframes);

    /// Open `url` in a new browsing context
    fn open_external(&mut self, url: &str);
}
