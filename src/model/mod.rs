//! Model module - Page state and data types
//!
//! This module contains the data structures the controller reads and writes.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Surfaces, their element ids, and the page tabs
//! - `track`: Track metadata as reported by the widget
//! - `marquee`: Title overflow detection and scroll animation math
//! - `page`: The host-page capability trait and its event/value types
//! - `document`: In-memory page implementation

mod types;
mod track;
mod marquee;
mod page;
mod document;

// Re-export all public types for convenient access
pub use types::{Surface, SurfaceIds, Tab, DESKTOP_IDS, MOBILE_IDS};

pub use track::{format_duration, Track, TrackUser};

pub use marquee::{
    animation_duration, speed_multiplier, MarqueeAnimation, MarqueeKeyframes,
    BASE_DURATION,
};

pub use page::{
    EmbedFrame, Page, PageEvent, TextStyle, TrackDisplay, EMBED_FRAME_ID, PLAY_ICON,
    PAUSE_ICON, SCROLLING_CLASS, TITLE_TEXT_STYLE,
};

pub use document::{glyph_width, Document, Element};
