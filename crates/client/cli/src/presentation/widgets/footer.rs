//! One-line footer: key hints, or the latest engine outcome.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tilevale_core::GameState;

const EXPLORE_HINTS: &str = "arrows move \u{00b7} d dump state \u{00b7} q quit";
const DIALOGUE_HINTS: &str =
    "space next \u{00b7} enter give/take \u{00b7} tab switch \u{00b7} esc close";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &GameState, status: Option<&str>) {
    let hints = if state.active_dialogue.is_some() {
        DIALOGUE_HINTS
    } else {
        EXPLORE_HINTS
    };

    let line = match status {
        Some(status) => Line::from(vec![
            Span::styled(status.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  |  {hints}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    };

    frame.render_widget(Paragraph::new(line), area);
}
