use std::collections::{HashSet, VecDeque};
use bitvec::prelude::*;
use crate::board_state::BoardState;
use crate::position::BoardPos;

/// The fewest pieces a region needs before it can be cleared.
pub const MIN_CLEARABLE: usize = 2;

/// A maximal set of orthogonally adjacent cells whose pieces share a type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Region {
    start: BoardPos,
    board_pos: HashSet<BoardPos>
}

impl Region {

    /// Gets the position the region was grown from.
    pub fn start(&self) -> BoardPos {
        self.start
    }

    /// Gets the number of cells in the region.
    pub fn len(&self) -> usize {
        self.board_pos.len()
    }

    /// Checks if the region has no cells, which happens when it was grown
    /// from an empty or invalid position.
    pub fn is_empty(&self) -> bool {
        self.board_pos.is_empty()
    }

    /// Checks if the region is large enough to clear.
    pub fn is_clearable(&self) -> bool {
        self.len() >= MIN_CLEARABLE
    }

    /// Checks if the given position on the board is part of the region.
    ///
    /// # Arguments
    ///
    /// * `pos` - position to check for in this region
    pub fn contains(&self, pos: BoardPos) -> bool {
        self.board_pos.contains(&pos)
    }

    /// Returns an iterator of all of the board positions in the region, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item=&BoardPos> {
        self.board_pos.iter()
    }

    /// Gets the positions in the region ordered by column, then by row.
    pub fn positions(&self) -> Vec<BoardPos> {
        let mut positions: Vec<BoardPos> = self.board_pos.iter().copied().collect();
        positions.sort();
        positions
    }

}

/// Finds the region of same-type pieces connected to a starting position.
///
/// Pieces connect through their four orthogonal neighbors only. If the start
/// is empty or off the board, the region is empty.
///
/// # Arguments
///
/// * `state` - the board to search
/// * `start` - the position to grow the region from
pub fn find_region(state: &BoardState, start: BoardPos) -> Region {
    let mut board_pos = HashSet::new();

    let start_piece = match state.get(start) {
        Ok(Some(piece)) => piece,
        _ => return Region { start, board_pos }
    };

    let height = state.height();
    let cell = |pos: BoardPos| pos.x as usize * height + pos.y as usize;

    let mut visited = bitvec![0; state.width() * height];
    let mut frontier = VecDeque::new();
    visited.set(cell(start), true);
    frontier.push_back(start);

    while let Some(pos) = frontier.pop_front() {
        board_pos.insert(pos);

        for neighbor in pos.neighbors() {
            if !state.is_within_bounds(neighbor) || visited[cell(neighbor)] {
                continue;
            }
            visited.set(cell(neighbor), true);

            if let Ok(Some(piece)) = state.get(neighbor) {
                if piece.matches(&start_piece) {
                    frontier.push_back(neighbor);
                }
            }
        }
    }

    Region { start, board_pos }
}
