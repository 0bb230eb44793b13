//! Dialogue modal: current script line plus both inventories with the
//! give/take cursor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tilevale_core::{GameState, Item};

use crate::app::{Column, Selection};

const ACCENT: Color = Color::Rgb(96, 165, 250);
const DIM: Color = Color::DarkGray;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &GameState, selection: &Selection) {
    let Some(dialogue) = &state.active_dialogue else {
        return;
    };
    let Some(npc) = state.npc(&dialogue.npc) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", npc.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [line_area, player_area, npc_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Min(3),
    ])
    .areas(inner);

    let script_line = npc.script.line(dialogue.line).unwrap_or("");
    let mut text = vec![Line::from(format!("\u{201c}{script_line}\u{201d}"))];
    if !npc.script.is_last(dialogue.line) {
        text.push(Line::from(Span::styled("(space) next", Style::default().fg(DIM))));
    }
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), line_area);

    render_inventory(
        frame,
        player_area,
        "Your items",
        state.player.inventory.items(),
        (selection.column == Column::Player).then_some(selection.index),
    );
    render_inventory(
        frame,
        npc_area,
        &format!("{}'s items", npc.name),
        npc.inventory.items(),
        (selection.column == Column::Npc).then_some(selection.index),
    );
}

fn render_inventory(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: &[Item],
    selected: Option<usize>,
) {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if items.is_empty() {
        lines.push(Line::from(Span::styled("  No items", Style::default().fg(DIM))));
    }
    for (index, item) in items.iter().enumerate() {
        let is_selected = selected == Some(index);
        let marker = if is_selected { "\u{25b8} " } else { "  " };
        let style = if is_selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(item.name.clone(), style),
            Span::styled(
                format!("  {}", item.description),
                Style::default().fg(DIM),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
