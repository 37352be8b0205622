use crate::board_state::BoardState;
use crate::error::BoardError;
use crate::piece::{Piece, PieceFactory};
use crate::position::BoardPos;

/// A piece created to fill a vacancy.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Spawn {
    pub piece: Piece,

    /// Where the piece starts before it drops in, above the top of the board.
    pub from: BoardPos,

    /// The cell the piece was placed in.
    pub to: BoardPos,

    /// The order in which the piece was created, starting from zero.
    pub creation_time: usize
}

/// Fills every empty cell of the given columns with a new piece.
///
/// Columns are filled in ascending order and each column from its top row
/// down, and creation times count up in that same order. Columns should
/// already be compacted, so that their empty cells sit at the top.
///
/// # Arguments
///
/// * `state` - the board to fill
/// * `factory` - produces the type of each new piece
/// * `columns` - the columns that may contain vacancies, in ascending order
pub fn refill<F: PieceFactory>(state: &mut BoardState, factory: &mut F,
                               columns: impl IntoIterator<Item=i32>) -> Result<Vec<Spawn>, BoardError> {
    let mut spawns = Vec::new();

    for x in columns {
        let vacancies = vacancies_in_column(state, x)?;

        for to in vacancies.iter().copied() {
            let piece = state.create_piece(factory.next_type(), to)?;
            let from = BoardPos::new(x, to.y - vacancies.len() as i32);
            spawns.push(Spawn { piece, from, to, creation_time: spawns.len() });
        }
    }

    Ok(spawns)
}

fn vacancies_in_column(state: &BoardState, x: i32) -> Result<Vec<BoardPos>, BoardError> {
    let mut vacancies = Vec::new();
    for y in 0..state.height() as i32 {
        let pos = BoardPos::new(x, y);
        if state.get(pos)?.is_none() {
            vacancies.push(pos);
        }
    }
    Ok(vacancies)
}
