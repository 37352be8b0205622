use std::fmt::{Display, Formatter};
use enumset::{enum_set, EnumSet, EnumSetType};

/// A direction from one cell to an orthogonally adjacent cell.
#[derive(EnumSetType, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West
}

/// All four orthogonal directions. Diagonals never count as adjacent.
pub const ALL_DIRECTIONS: EnumSet<Direction> = enum_set!(
    Direction::North | Direction::South | Direction::East | Direction::West
);

/// A cell on a board. `x` is the column and `y` is the row, with rows
/// increasing downward. A position may lie outside any particular board;
/// the board decides whether it is valid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardPos {

    /// The column of the position
    pub x: i32,

    /// The row of the position
    pub y: i32

}

impl BoardPos {

    /// Creates a new position with a column and a row.
    ///
    /// # Arguments
    ///
    /// * `x` - the column of the position
    /// * `y` - the row of the position, increasing downward
    pub fn new(x: i32, y: i32) -> BoardPos {
        BoardPos { x, y }
    }

    /// Returns the position one step away in the given direction. The result
    /// is not bounds-checked.
    ///
    /// # Arguments
    ///
    /// * `direction` - the direction to step in
    pub fn neighbor(self, direction: Direction) -> BoardPos {
        match direction {
            Direction::North => BoardPos::new(self.x, self.y - 1),
            Direction::South => BoardPos::new(self.x, self.y + 1),
            Direction::East => BoardPos::new(self.x + 1, self.y),
            Direction::West => BoardPos::new(self.x - 1, self.y)
        }
    }

    /// Returns an iterator of the four orthogonal neighbors of this position,
    /// whether or not they are on a board.
    pub fn neighbors(self) -> impl Iterator<Item=BoardPos> {
        ALL_DIRECTIONS.iter().map(move |direction| self.neighbor(direction))
    }

}

impl Display for BoardPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::position::{BoardPos, Direction};

    #[test]
    fn neighbor_north_decreases_row() {
        assert_eq!(BoardPos::new(3, 2), BoardPos::new(3, 3).neighbor(Direction::North));
    }

    #[test]
    fn neighbor_south_increases_row() {
        assert_eq!(BoardPos::new(3, 4), BoardPos::new(3, 3).neighbor(Direction::South));
    }

    #[test]
    fn neighbor_east_increases_column() {
        assert_eq!(BoardPos::new(4, 3), BoardPos::new(3, 3).neighbor(Direction::East));
    }

    #[test]
    fn neighbor_west_decreases_column() {
        assert_eq!(BoardPos::new(2, 3), BoardPos::new(3, 3).neighbor(Direction::West));
    }

    #[test]
    fn neighbor_at_origin_may_be_negative() {
        assert_eq!(BoardPos::new(-1, 0), BoardPos::new(0, 0).neighbor(Direction::West));
        assert_eq!(BoardPos::new(0, -1), BoardPos::new(0, 0).neighbor(Direction::North));
    }

    #[test]
    fn neighbors_only_orthogonal() {
        let neighbors: Vec<BoardPos> = BoardPos::new(1, 1).neighbors().collect();
        assert_eq!(
            vec![BoardPos::new(1, 0), BoardPos::new(1, 2), BoardPos::new(2, 1), BoardPos::new(0, 1)],
            neighbors
        );
    }

    #[test]
    fn equals_components_reversed_not_equal() {
        assert_ne!(BoardPos::new(1, 4), BoardPos::new(4, 1));
    }

    #[test]
    fn format_negative_components_signed() {
        assert_eq!("(-1, 4)", format!("{}", BoardPos::new(-1, 4)));
    }
}
