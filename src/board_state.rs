use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::mem::size_of;
use crate::error::{BoardError, DefinitionError};
use crate::piece::{Piece, PieceId, PieceType};
use crate::position::BoardPos;

/// Holds which piece occupies each cell of a board, and where each piece is.
///
/// Cells are stored column by column. Every occupied cell's piece maps back
/// to that cell, and no piece occupies two cells at once: placing a piece
/// that is already on the board moves it, and overwriting a piece removes it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BoardState {
    width: usize,
    height: usize,
    cells: Vec<Option<Piece>>,
    positions: HashMap<Piece, BoardPos>,
    next_id: usize
}

impl BoardState {

    /// Creates a board state with every cell empty.
    ///
    /// # Arguments
    ///
    /// * `width` - the number of columns
    /// * `height` - the number of rows
    pub fn new(width: usize, height: usize) -> Result<BoardState, BoardError> {
        if width == 0 || height == 0 {
            return Err(DefinitionError::Empty.into());
        }

        let too_large = DefinitionError::TooLarge { width, height };
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large.into());
        }
        let area = width.checked_mul(height)
            .filter(|area| area.checked_mul(size_of::<Option<Piece>>()).map_or(false, |bytes| bytes <= isize::MAX as usize))
            .ok_or(too_large)?;

        Ok(BoardState {
            width,
            height,
            cells: vec![None; area],
            positions: HashMap::new(),
            next_id: 0
        })
    }

    /// Gets the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks if a position lies on the board.
    pub fn is_within_bounds(&self, pos: BoardPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Gets the piece at a position, if any.
    ///
    /// # Arguments
    ///
    /// * `pos` - the position to look at
    pub fn get(&self, pos: BoardPos) -> Result<Option<Piece>, BoardError> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    /// Places a piece at a position, or empties it, and returns the previous
    /// occupant. A piece already elsewhere on the board is moved rather than
    /// duplicated.
    ///
    /// # Arguments
    ///
    /// * `pos` - the position to change
    /// * `piece` - the new occupant, or `None` to empty the cell
    pub fn set(&mut self, pos: BoardPos, piece: Option<Piece>) -> Result<Option<Piece>, BoardError> {
        let index = self.index(pos)?;

        if let Some(piece) = piece {
            if let Some(old_pos) = self.positions.get(&piece).copied().filter(|&old_pos| old_pos != pos) {
                let old_index = self.index(old_pos)?;
                if self.cells[old_index] == Some(piece) {
                    self.cells[old_index] = None;
                }
            }
            self.next_id = self.next_id.max(piece.id().index().saturating_add(1));
        }

        let previous = std::mem::replace(&mut self.cells[index], piece);
        if let Some(previous) = previous {
            self.positions.remove(&previous);
        }
        if let Some(piece) = piece {
            self.positions.insert(piece, pos);
        }

        Ok(previous)
    }

    /// Empties a position and returns the piece that was there.
    ///
    /// # Arguments
    ///
    /// * `pos` - the position to empty
    pub fn take(&mut self, pos: BoardPos) -> Result<Option<Piece>, BoardError> {
        self.set(pos, None)
    }

    /// Creates a piece with a new identity and places it at a position,
    /// replacing any occupant.
    ///
    /// # Arguments
    ///
    /// * `piece_type` - the type of the new piece
    /// * `pos` - where to place the new piece
    pub fn create_piece(&mut self, piece_type: PieceType, pos: BoardPos) -> Result<Piece, BoardError> {
        self.index(pos)?;

        let piece = Piece::new(PieceId(self.next_id), piece_type);
        self.set(pos, Some(piece))?;
        Ok(piece)
    }

    /// Finds the position of a piece. Returns `None` if the piece is not on
    /// this board, either because it was cleared or because it never was.
    ///
    /// # Arguments
    ///
    /// * `piece` - the piece to look for
    pub fn position_of(&self, piece: &Piece) -> Option<BoardPos> {
        let pos = *self.positions.get(piece)?;
        match self.cells[self.index(pos).ok()?] == Some(*piece) {
            true => Some(pos),
            false => None
        }
    }

    /// Returns an iterator of every cell on the board and its occupant. Cells
    /// are visited column by column, top to bottom within a column, in the
    /// same order on every call.
    pub fn iter(&self) -> impl Iterator<Item=(BoardPos, Option<Piece>)> + '_ {
        self.cells.iter().enumerate().map(move |(index, &piece)| (self.pos_at(index), piece))
    }

    /// Gets the number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.positions.len()
    }

    /// Gets the type of every cell, one row at a time from the top.
    pub fn type_rows(&self) -> Vec<Vec<Option<PieceType>>> {
        (0..self.height).map(|y| {
            (0..self.width)
                .map(|x| self.cells[x * self.height + y].map(|piece| piece.piece_type()))
                .collect()
        }).collect()
    }

    fn index(&self, pos: BoardPos) -> Result<usize, BoardError> {
        match self.is_within_bounds(pos) {
            true => Ok(pos.x as usize * self.height + pos.y as usize),
            false => Err(BoardError::OutOfBounds(pos.x, pos.y))
        }
    }

    fn pos_at(&self, index: usize) -> BoardPos {
        BoardPos::new((index / self.height) as i32, (index % self.height) as i32)
    }

}

impl Display for BoardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.type_rows() {
            let cells: Vec<String> = row.iter().map(|cell| match cell {
                Some(piece_type) => piece_type.to_string(),
                None => String::from(".")
            }).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }

        Ok(())
    }
}
