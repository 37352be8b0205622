use bitvec::prelude::*;
use log::{debug, trace};
use crate::board_state::BoardState;
use crate::change::ResolveResult;
use crate::error::{BoardError, DefinitionError};
use crate::gravity::compact;
use crate::matching::{find_region, Region};
use crate::piece::{Piece, PieceFactory, PieceType};
use crate::position::BoardPos;
use crate::refill::refill;

/// A board where selecting a piece clears every same-type piece connected
/// to it, lets the pieces above fall into the gaps, and refills the top.
///
/// The board is the only writer of its cells. Callers read it through
/// [Board::get], [Board::iter] and [Board::state], and change it only
/// through [Board::resolve].
#[derive(Clone, Debug)]
pub struct Board<F> {
    state: BoardState,
    factory: F
}

impl<F: PieceFactory> Board<F> {

    /// Creates a board from a matrix of piece types, one new piece per cell.
    ///
    /// # Arguments
    ///
    /// * `definition` - the piece types of the board, one row at a time from the top.
    ///                  Every row must have the same, nonzero length.
    /// * `factory` - produces the types of the pieces that refill the board
    pub fn new<R: AsRef<[PieceType]>>(definition: &[R], factory: F) -> Result<Board<F>, BoardError> {
        let width = definition.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let height = definition.len();

        for (row, types) in definition.iter().enumerate() {
            let found = types.as_ref().len();
            if found != width {
                return Err(DefinitionError::RaggedRow { row, expected: width, found }.into());
            }
        }

        let mut state = BoardState::new(width, height)?;
        for (y, types) in definition.iter().enumerate() {
            for (x, &piece_type) in types.as_ref().iter().enumerate() {
                state.create_piece(piece_type, BoardPos::new(x as i32, y as i32))?;
            }
        }

        debug!("created {}x{} board", width, height);
        Ok(Board { state, factory })
    }

    /// Gets the number of columns.
    pub fn width(&self) -> usize {
        self.state.width()
    }

    /// Gets the number of rows.
    pub fn height(&self) -> usize {
        self.state.height()
    }

    /// Checks if a position lies on the board.
    pub fn is_within_bounds(&self, pos: BoardPos) -> bool {
        self.state.is_within_bounds(pos)
    }

    /// Gets the piece at a position, if any.
    pub fn get(&self, pos: BoardPos) -> Result<Option<Piece>, BoardError> {
        self.state.get(pos)
    }

    /// Finds the position of a piece, or `None` if it is no longer on the board.
    pub fn position_of(&self, piece: &Piece) -> Option<BoardPos> {
        self.state.position_of(piece)
    }

    /// Returns an iterator of every cell on the board and its occupant,
    /// column by column.
    pub fn iter(&self) -> impl Iterator<Item=(BoardPos, Option<Piece>)> + '_ {
        self.state.iter()
    }

    /// Gets read-only access to the board's cells.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Gets the factory that produces refill pieces.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Finds the region of same-type pieces connected to a position.
    ///
    /// # Arguments
    ///
    /// * `pos` - the position to grow the region from
    pub fn region(&self, pos: BoardPos) -> Result<Region, BoardError> {
        self.state.get(pos)?;
        Ok(find_region(&self.state, pos))
    }

    /// Checks if selecting a position would clear anything, i.e. whether its
    /// piece is connected to at least one other piece of the same type.
    ///
    /// # Arguments
    ///
    /// * `pos` - the position to check
    pub fn has_connections(&self, pos: BoardPos) -> Result<bool, BoardError> {
        Ok(self.region(pos)?.is_clearable())
    }

    /// Clears the region connected to a position, drops the remaining pieces
    /// into the gaps, and fills the board back up with new pieces.
    ///
    /// If the region has fewer than two pieces, or the position is empty,
    /// nothing changes and the result is empty. The board is always full
    /// again after a resolve that clears something.
    ///
    /// # Arguments
    ///
    /// * `pos` - the selected position
    pub fn resolve(&mut self, pos: BoardPos) -> Result<ResolveResult, BoardError> {
        let region = self.region(pos)?;
        if !region.is_clearable() {
            trace!("region at {} has {} pieces, nothing to clear", pos, region.len());
            return Ok(ResolveResult::default());
        }

        let mut columns = bitvec![0; self.width()];
        let mut cleared = Vec::with_capacity(region.len());
        for cell in region.positions() {
            if let Some(piece) = self.state.take(cell)? {
                cleared.push(piece);
            }
            columns.set(cell.x as usize, true);
        }

        let falls = compact(&mut self.state, columns.iter_ones().map(|x| x as i32))?;
        let spawns = refill(&mut self.state, &mut self.factory, columns.iter_ones().map(|x| x as i32))?;

        debug!(
            "resolved {}: cleared {} pieces, {} fell, {} spawned",
            pos, cleared.len(), falls.len(), spawns.len()
        );
        Ok(ResolveResult::new(cleared, falls, spawns))
    }

}
