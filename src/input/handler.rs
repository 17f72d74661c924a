use std::time::Instant;

use crossterm::event::KeyCode;

use crate::game::Game;

/// Maps a key press to an engine operation. Phase gating lives in the
/// engine, so this stays a dumb table; unrecognized keys do nothing.
pub fn handle_input(game: &mut Game, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Left => game.move_piece(-1),
        KeyCode::Right => game.move_piece(1),
        KeyCode::Down => game.soft_drop(),
        KeyCode::Up => game.rotate_piece(),
        KeyCode::Char(' ') => game.hard_drop(),
        KeyCode::Char('p') | KeyCode::Char('P') => game.toggle_pause(now),
        KeyCode::Char('r') | KeyCode::Char('R') => game.restart(now),
        _ => {}
    }
}
