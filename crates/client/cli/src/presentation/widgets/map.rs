//! Map widget: the render adapter for the game state.
//!
//! A pure function of `(state, scale)` that repaints the whole frame on
//! every draw; there is no diffing against the previous frame. Draw order
//! is fixed: tiles first, then NPC markers, then the player on top.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use tilevale_core::{GameState, Position};

const FLOOR: Color = Color::Rgb(26, 26, 46);
const WALL: Color = Color::Rgb(15, 15, 26);
const NPC: Color = Color::Rgb(96, 165, 250);
const NPC_TEXT: Color = Color::Rgb(255, 255, 255);
const PLAYER: Color = Color::Rgb(74, 222, 128);
const PLAYER_TEXT: Color = Color::Rgb(22, 101, 52);

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &GameState, scale: u16) {
    let buf = frame.buffer_mut();
    // Terminal cells are roughly twice as tall as wide; two columns per
    // scale step keeps tiles square-ish.
    let tile_width = scale * 2;
    let tile_height = scale;

    for y in 0..state.map.height() {
        for x in 0..state.map.width() {
            let position = Position::new(x as i32, y as i32);
            let tile = match state.map.tile(position) {
                Some(tile) => tile,
                None => continue,
            };
            let color = if tile.is_passable() { FLOOR } else { WALL };
            fill_tile(buf, area, position, tile_width, tile_height, Style::default().bg(color));
        }
    }

    for npc in &state.npcs {
        let initial = npc
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        paint_marker(
            buf,
            area,
            npc.position,
            tile_width,
            tile_height,
            initial,
            Style::default()
                .bg(NPC)
                .fg(NPC_TEXT)
                .add_modifier(Modifier::BOLD),
        );
    }

    // Player is always drawn last, on top.
    paint_marker(
        buf,
        area,
        state.player.position,
        tile_width,
        tile_height,
        '@',
        Style::default()
            .bg(PLAYER)
            .fg(PLAYER_TEXT)
            .add_modifier(Modifier::BOLD),
    );
}

/// Paints the `tile_width` x `tile_height` cell block of one map tile.
fn fill_tile(
    buf: &mut Buffer,
    area: Rect,
    position: Position,
    tile_width: u16,
    tile_height: u16,
    style: Style,
) {
    for dy in 0..tile_height {
        for dx in 0..tile_width {
            let cx = area.x as u32 + position.x as u32 * tile_width as u32 + dx as u32;
            let cy = area.y as u32 + position.y as u32 * tile_height as u32 + dy as u32;
            if cx >= area.right() as u32 || cy >= area.bottom() as u32 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((cx as u16, cy as u16)) {
                cell.set_char(' ');
                cell.set_style(style);
            }
        }
    }
}

/// Fills a tile block with the marker style and sets its glyph in the
/// center cell.
fn paint_marker(
    buf: &mut Buffer,
    area: Rect,
    position: Position,
    tile_width: u16,
    tile_height: u16,
    glyph: char,
    style: Style,
) {
    fill_tile(buf, area, position, tile_width, tile_height, style);

    let cx = area.x as u32 + position.x as u32 * tile_width as u32 + (tile_width / 2) as u32;
    let cy = area.y as u32 + position.y as u32 * tile_height as u32 + (tile_height / 2) as u32;
    if cx >= area.right() as u32 || cy >= area.bottom() as u32 {
        return;
    }
    if let Some(cell) = buf.cell_mut((cx as u16, cy as u16)) {
        cell.set_char(glyph);
    }
}
