use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a type matrix cannot become a board.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DefinitionError {

    /// The matrix has no rows, or its rows have no cells.
    Empty,

    /// A row's length differs from the first row's length.
    RaggedRow { row: usize, expected: usize, found: usize },

    /// A dimension does not fit in the coordinate range of a position.
    TooLarge { width: usize, height: usize }

}

impl Display for DefinitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::Empty => write!(f, "board definition has no cells"),
            DefinitionError::RaggedRow { row, expected, found } => write!(
                f, "row {row} has {found} cells but the board is {expected} cells wide"
            ),
            DefinitionError::TooLarge { width, height } => write!(
                f, "board of {width}x{height} cells is too large"
            )
        }
    }
}

/// Errors surfaced by board operations.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BoardError {

    /// A position outside the board was given.
    OutOfBounds(i32, i32),

    /// The board could not be built from its type matrix.
    InvalidDefinition(DefinitionError)

}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfBounds(x, y) => write!(f, "position ({x}, {y}) is outside the board"),
            BoardError::InvalidDefinition(err) => write!(f, "invalid board definition: {err}")
        }
    }
}

impl Error for DefinitionError {}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoardError::InvalidDefinition(err) => Some(err),
            BoardError::OutOfBounds(..) => None
        }
    }
}

impl From<DefinitionError> for BoardError {
    fn from(err: DefinitionError) -> Self {
        BoardError::InvalidDefinition(err)
    }
}
