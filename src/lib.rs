//! A board of typed pieces where selecting a cell clears every piece of the
//! same type connected to it. Pieces above the cleared cells fall to fill the
//! gaps, and new pieces refill the top of the board. Each resolve reports how
//! every piece moved so a presentation layer can animate it.

mod board;
mod board_state;
mod change;
mod error;
mod gravity;
mod matching;
mod piece;
mod position;
mod refill;

pub use crate::position::*;
pub use crate::piece::*;
pub use crate::error::*;
pub use crate::board_state::*;
pub use crate::matching::*;
pub use crate::gravity::*;
pub use crate::refill::*;
pub use crate::change::*;
pub use crate::board::*;
