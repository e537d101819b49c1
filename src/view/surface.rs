//! Mini-player surface rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Document, Surface};
use super::progress::render_progress_bar;
use super::utils::title_text;
use super::ViewContext;

/// Rows taken by a surface, borders included
pub fn surface_height(surface: Surface) -> u16 {
    match surface {
        Surface::Desktop => 5,
        Surface::Mobile => 6,
    }
}

pub fn render_surface(
    frame: &mut Frame,
    area: Rect,
    document: &Document,
    surface: Surface,
    ctx: &ViewContext,
) {
    let ids = surface.ids();
    let title = match surface {
        Surface::Desktop => " Now playing ",
        Surface::Mobile => " ♪ ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Rgb(255, 85, 0)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = document
        .element(ids.play)
        .map(|e| e.text.clone())
        .unwrap_or_default();
    let controls = Line::from(vec![
        Span::raw(" ⏮  "),
        Span::styled(icon, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  ⏭ "),
    ]);

    let (title_line, artist_line) = match document.element(ids.track).and_then(|e| e.track.as_ref()) {
        Some(display) => (
            Line::from(Span::styled(
                title_text(display, ctx.elapsed),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                display.artist().to_string(),
                Style::default().fg(Color::Gray),
            )),
        ),
        None => (Line::from("Loading…"), Line::from("")),
    };
    let open = document
        .element(ids.open)
        .map(|_| Line::from(Span::styled(" ↗ o", Style::default().fg(Color::Cyan))))
        .unwrap_or_default();
    let (percent, time) = document
        .element(ids.progress)
        .map(|e| (e.progress_percent, e.text.as_str()))
        .unwrap_or((0.0, ""));

    match surface {
        Surface::Desktop => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Length(1)])
                .split(inner);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(12), // controls
                    Constraint::Min(0),     // track info
                    Constraint::Length(5),  // open
                ])
                .split(rows[0]);

            frame.render_widget(Paragraph::new(controls), columns[0]);
            frame.render_widget(Paragraph::new(vec![title_line, artist_line]), columns[1]);
            frame.render_widget(Paragraph::new(open), columns[2]);
            render_progress_bar(frame, rows[1], percent, time);
        }
        Surface::Mobile => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // track info
                    Constraint::Length(1), // controls + open
                    Constraint::Length(1), // progress
                ])
                .split(inner);

            frame.render_widget(Paragraph::new(vec![title_line, artist_line]), rows[0]);
            let mut spans = controls.spans;
            spans.extend(open.spans);
            frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
            render_progress_bar(frame, rows[2], percent, time);
        }
    }
}
