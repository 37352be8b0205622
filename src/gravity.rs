use crate::board_state::BoardState;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::position::BoardPos;

/// A piece that dropped to a lower row of its column.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Fall {
    pub piece: Piece,
    pub from: BoardPos,
    pub to: BoardPos
}

/// Drops the pieces of the given columns down so that no column has an
/// empty cell beneath a piece. Pieces keep their order within a column.
/// Only pieces that moved are reported.
///
/// # Arguments
///
/// * `state` - the board to compact
/// * `columns` - the columns that may contain gaps
pub fn compact(state: &mut BoardState, columns: impl IntoIterator<Item=i32>) -> Result<Vec<Fall>, BoardError> {
    let mut falls = Vec::new();
    for x in columns {
        falls.extend(compact_column(state, x)?);
    }
    Ok(falls)
}

/// Drops the pieces of a single column, scanning upward from the bottom row
/// and moving each piece down by the number of empty cells seen below it.
///
/// # Arguments
///
/// * `state` - the board to compact
/// * `x` - the column to compact
pub fn compact_column(state: &mut BoardState, x: i32) -> Result<Vec<Fall>, BoardError> {
    let mut falls = Vec::new();
    let mut empty_below = 0;

    for y in (0..state.height() as i32).rev() {
        let from = BoardPos::new(x, y);
        match state.get(from)? {
            None => empty_below += 1,
            Some(piece) if empty_below > 0 => {
                let to = BoardPos::new(x, y + empty_below);
                state.set(to, Some(piece))?;
                falls.push(Fall { piece, from, to });
            }
            Some(_) => {}
        }
    }

    Ok(falls)
}

#[cfg(test)]
mod tests {
    use crate::{compact, compact_column, BoardError, BoardPos, BoardState, Piece};

    fn column_types(state: &BoardState, x: usize) -> Vec<Option<u32>> {
        state.type_rows().iter().map(|row| row[x]).collect()
    }

    fn column_of(types: &[Option<u32>]) -> (BoardState, Vec<Option<Piece>>) {
        let mut state = BoardState::new(1, types.len()).unwrap();
        let pieces: Vec<Option<Piece>> = types.iter().enumerate().map(|(y, piece_type)| {
            piece_type.map(|piece_type| state.create_piece(piece_type, BoardPos::new(0, y as i32)).unwrap())
        }).collect();
        (state, pieces)
    }

    #[test]
    fn compact_column_full_no_falls() {
        let (mut state, _) = column_of(&[Some(1), Some(2), Some(3)]);
        let before = state.clone();
        assert_eq!(Ok(Vec::new()), compact_column(&mut state, 0));
        assert_eq!(before, state);
    }

    #[test]
    fn compact_column_gaps_moved_to_top() {
        let (mut state, _) = column_of(&[Some(1), None, Some(2), None, None, Some(3)]);
        compact_column(&mut state, 0).unwrap();
        assert_eq!(vec![None, None, None, Some(1), Some(2), Some(3)], column_types(&state, 0));
    }

    #[test]
    fn compact_column_reports_only_moved() {
        let (mut state, pieces) = column_of(&[Some(1), Some(2), None, Some(3)]);
        let falls = compact_column(&mut state, 0).unwrap();

        assert_eq!(2, falls.len());
        assert_eq!(pieces[1].unwrap(), falls[0].piece);
        assert_eq!(BoardPos::new(0, 1), falls[0].from);
        assert_eq!(BoardPos::new(0, 2), falls[0].to);
        assert_eq!(pieces[0].unwrap(), falls[1].piece);
        assert_eq!(BoardPos::new(0, 0), falls[1].from);
        assert_eq!(BoardPos::new(0, 1), falls[1].to);
        assert!(falls.iter().all(|fall| fall.piece != pieces[3].unwrap()));
    }

    #[test]
    fn compact_column_keeps_identity() {
        let (mut state, pieces) = column_of(&[Some(1), None]);
        compact_column(&mut state, 0).unwrap();
        assert_eq!(Some(BoardPos::new(0, 1)), state.position_of(&pieces[0].unwrap()));
        assert_eq!(1, state.occupied());
    }

    #[test]
    fn compact_column_empty_column_no_falls() {
        let (mut state, _) = column_of(&[None, None]);
        assert_eq!(Ok(Vec::new()), compact_column(&mut state, 0));
    }

    #[test]
    fn compact_column_off_board_out_of_bounds() {
        let (mut state, _) = column_of(&[Some(1)]);
        assert_eq!(Err(BoardError::OutOfBounds(1, 0)), compact_column(&mut state, 1));
    }

    #[test]
    fn compact_skips_other_columns() {
        let mut state = BoardState::new(2, 2).unwrap();
        state.create_piece(1, BoardPos::new(0, 0)).unwrap();
        state.create_piece(2, BoardPos::new(1, 0)).unwrap();

        let falls = compact(&mut state, vec![1]).unwrap();

        assert_eq!(1, falls.len());
        assert_eq!(vec![Some(1), None], column_types(&state, 0));
        assert_eq!(vec![None, Some(2)], column_types(&state, 1));
    }
}
