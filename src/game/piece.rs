use crate::constants::ARENA_WIDTH;
use ratatui::style::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    T,
    J,
    L,
    O,
    I,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    pub fn shape(self) -> Vec<Vec<bool>> {
        match self {
            PieceKind::T => vec![
                vec![false, false, false],
                vec![true, true, true],
                vec![false, true, false],
            ],
            PieceKind::J => vec![
                vec![false, true, false],
                vec![false, true, false],
                vec![true, true, false],
            ],
            PieceKind::L => vec![
                vec![false, true, false],
                vec![false, true, false],
                vec![false, true, true],
            ],
            PieceKind::O => vec![vec![true, true], vec![true, true]],
            PieceKind::I => vec![
                vec![false, true, false, false],
                vec![false, true, false, false],
                vec![false, true, false, false],
                vec![false, true, false, false],
            ],
            PieceKind::S => vec![
                vec![false, true, true],
                vec![true, true, false],
                vec![false, false, false],
            ],
            PieceKind::Z => vec![
                vec![true, true, false],
                vec![false, true, true],
                vec![false, false, false],
            ],
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::T => Color::Rgb(0xFF, 0x0D, 0x72),
            PieceKind::J => Color::Rgb(0xF5, 0x38, 0xFF),
            PieceKind::L => Color::Rgb(0x0D, 0xFF, 0x72),
            PieceKind::O => Color::Rgb(0x0D, 0xC2, 0xFF),
            PieceKind::I => Color::Rgb(0xFF, 0x8E, 0x0D),
            PieceKind::S => Color::Rgb(0xFF, 0xE1, 0x38),
            PieceKind::Z => Color::Rgb(0x38, 0x77, 0xFF),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A fresh piece at its spawn position: top of the arena, centered
    /// horizontally for its shape width.
    pub fn new(kind: PieceKind) -> Self {
        let shape = kind.shape();
        let width = shape[0].len() as i32;
        Self {
            kind,
            shape,
            x: ARENA_WIDTH as i32 / 2 - width / 2,
            y: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.shape[0].len() as i32
    }

    /// 90 degrees clockwise; four applications restore the original shape.
    pub fn rotated(&self) -> Self {
        let mut rotated = self.clone();
        let size = self.shape.len();
        let mut new_shape = vec![vec![false; size]; size];

        for i in 0..size {
            for j in 0..size {
                new_shape[j][size - 1 - i] = self.shape[i][j];
            }
        }

        rotated.shape = new_shape;
        rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_count(shape: &[Vec<bool>]) -> usize {
        shape
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c)
            .count()
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind);
            let back = piece.rotated().rotated().rotated().rotated();
            assert_eq!(piece.shape, back.shape, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_preserves_occupied_cell_count() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind);
            let rotated = piece.rotated();
            assert_eq!(
                occupied_count(&piece.shape),
                occupied_count(&rotated.shape),
                "{:?}",
                kind
            );
        }
    }

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(occupied_count(&kind.shape()), 4, "{:?}", kind);
        }
    }

    #[test]
    fn spawn_position_is_centered_for_shape_width() {
        // 3-wide shapes spawn at 5 - 1 = 4, the 4-wide I at 5 - 2 = 3
        assert_eq!(Piece::new(PieceKind::T).x, 4);
        assert_eq!(Piece::new(PieceKind::O).x, 4);
        assert_eq!(Piece::new(PieceKind::I).x, 3);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).y, 0);
        }
    }
}
