//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

/// Gauge label: the `m:ss / m:ss` time when known, the percentage otherwise
pub fn progress_label(percent: f64, time: &str) -> String {
    if time.is_empty() {
        format!("{:.0}%", percent.clamp(0.0, 100.0))
    } else {
        time.to_string()
    }
}

pub fn render_progress_bar(frame: &mut Frame, area: Rect, percent: f64, time: &str) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Rgb(255, 85, 0)))
        .ratio(ratio)
        .label(progress_label(percent, time));

    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_wins_over_percentage() {
        assert_eq!(progress_label(25.0, "0:50 / 3:20"), "0:50 / 3:20");
        assert_eq!(progress_label(25.0, ""), "25%");
        assert_eq!(progress_label(130.0, ""), "100%");
    }
}
