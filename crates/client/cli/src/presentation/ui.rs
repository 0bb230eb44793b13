//! Top-level frame layout: map view, footer, and the dialogue overlay.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;
use tilevale_core::GameState;

use crate::app::Selection;
use crate::presentation::widgets;

pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    selection: &Selection,
    scale: u16,
    status: Option<&str>,
) {
    let [map_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    widgets::map::render(frame, map_area, state, scale);
    widgets::footer::render(frame, footer_area, state, status);

    if state.active_dialogue.is_some() {
        let modal = centered(frame.area(), 46, 16);
        frame.render_widget(Clear, modal);
        widgets::dialogue::render(frame, modal, state, selection);
    }
}

/// Centers a fixed-size popup inside `area`, shrinking to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
