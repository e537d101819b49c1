//! Utility functions for rendering the mini-player

use std::time::Duration;

use crate::model::{glyph_width, MarqueeAnimation, TrackDisplay, TITLE_TEXT_STYLE};

/// Number of title characters that fit a container `width_px` wide
pub fn visible_chars(width_px: u32) -> usize {
    (f64::from(width_px) / glyph_width(TITLE_TEXT_STYLE)).floor() as usize
}

/// The slice of a scrolling title visible `elapsed` into its animation
pub fn marquee_window(title: &str, animation: &MarqueeAnimation, elapsed: Duration) -> String {
    let skip = (animation.offset_at(elapsed) / glyph_width(TITLE_TEXT_STYLE)).round() as usize;
    title
        .chars()
        .skip(skip)
        .take(visible_chars(animation.container_width))
        .collect()
}

/// Title text as it appears in the track region right now
pub fn title_text(display: &TrackDisplay, elapsed: Duration) -> String {
    match display.animation() {
        Some(animation) => marquee_window(display.title(), animation, elapsed),
        None => display.title().to_string(),
    }
}
