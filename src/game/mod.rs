pub mod arena;
pub mod piece;
pub mod state;

pub use arena::{Arena, Cell};
pub use piece::{Piece, PieceKind};
pub use state::{Game, Phase};
