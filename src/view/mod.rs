//! View module - terminal rendering of the page document
//!
//! This module draws the page with ratatui. It is organized into submodules
//! by component type:
//!
//! - `utils`: Marquee windowing helpers
//! - `layout`: Tab bar and content panel
//! - `surface`: The visible mini-player surface
//! - `progress`: Progress bar rendering

mod utils;
mod layout;
mod surface;
mod progress;

use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::Document;

pub use utils::{marquee_window, title_text, visible_chars};

/// Per-frame rendering inputs that are not part of the document
pub struct ViewContext<'a> {
    /// Time since the page loaded, drives marquee animations
    pub elapsed: Duration,
    pub status: Option<&'a str>,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, document: &Document, ctx: &ViewContext) {
        let player_height = document
            .visible_surface()
            .map(surface::surface_height)
            .unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Tab bar
                Constraint::Min(0),                // Active panel
                Constraint::Length(player_height), // Mini-player
                Constraint::Length(1),             // Status line
            ])
            .split(frame.area());

        layout::render_tab_bar(frame, chunks[0], document);
        layout::render_panel(frame, chunks[1], document);

        if let Some(visible) = document.visible_surface() {
            surface::render_surface(frame, chunks[2], document, visible, ctx);
        }

        let status = ctx
            .status
            .unwrap_or(" space play/pause · n next · p prev · o open · 1-6 tabs · q quit");
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }
}
