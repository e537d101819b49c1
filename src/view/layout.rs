//! Layout rendering (tab bar and content panel)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::model::{Document, Page, Tab};

pub fn render_tab_bar(frame: &mut Frame, area: Rect, document: &Document) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.name())))
        .collect();

    // highlight follows the "active" class, which flips at the end of a fade
    let selected = Tab::ALL
        .iter()
        .position(|tab| document.has_class(tab.tab_ids()[0], "active"));

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Profile "))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, area);
}

pub fn render_panel(frame: &mut Frame, area: Rect, document: &Document) {
    let (title, body, fading) = match document.active_tab() {
        Some(tab) => {
            let element = document.element(tab.content_id());
            let body = element.map(|e| e.text.clone()).unwrap_or_default();
            let fading = document.has_class(tab.content_id(), "fade-out");
            (format!(" {} ", tab.name()), body, fading)
        }
        None => (String::from(" "), String::new(), false),
    };

    let style = if fading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let panel = Paragraph::new(body)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(panel, area);
}
