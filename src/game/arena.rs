use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, LINE_SCORE};
use crate::game::piece::{Piece, PieceKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(PieceKind),
}

pub type Arena = [[Cell; ARENA_WIDTH]; ARENA_HEIGHT];

pub fn empty_arena() -> Arena {
    [[Cell::Empty; ARENA_WIDTH]; ARENA_HEIGHT]
}

/// True if any occupied cell of the piece lands out of bounds or on a
/// settled cell. Safe for positions partially or fully outside the arena.
pub fn collides(arena: &Arena, piece: &Piece) -> bool {
    for (y, row) in piece.shape.iter().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            if !occupied {
                continue;
            }
            let ax = piece.x + x as i32;
            let ay = piece.y + y as i32;
            if ax < 0 || ax >= ARENA_WIDTH as i32 || ay < 0 || ay >= ARENA_HEIGHT as i32 {
                return true;
            }
            if arena[ay as usize][ax as usize] != Cell::Empty {
                return true;
            }
        }
    }
    false
}

/// Writes the piece into the arena. The caller must have checked
/// `!collides(arena, piece)` first; no bounds checking happens here.
pub fn merge(arena: &mut Arena, piece: &Piece) {
    for (y, row) in piece.shape.iter().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            if occupied {
                let ax = (piece.x + x as i32) as usize;
                let ay = (piece.y + y as i32) as usize;
                arena[ay][ax] = Cell::Filled(piece.kind);
            }
        }
    }
}

/// Removes every fully-occupied row, inserting blank rows at the top so the
/// arena keeps its height. Returns the points awarded: the first line in a
/// sweep is worth LINE_SCORE, and each further line doubles the rate.
pub fn sweep(arena: &mut Arena) -> u32 {
    let mut points = 0;
    let mut multiplier = 1;
    let mut y = ARENA_HEIGHT - 1;
    loop {
        if arena[y].iter().all(|&cell| cell != Cell::Empty) {
            // Shift everything above down one row; the row that slides into
            // index y gets re-examined on the next pass.
            for row in (1..=y).rev() {
                arena[row] = arena[row - 1];
            }
            arena[0] = [Cell::Empty; ARENA_WIDTH];
            points += multiplier * LINE_SCORE;
            multiplier *= 2;
        } else {
            if y == 0 {
                break;
            }
            y -= 1;
        }
    }
    points
}
