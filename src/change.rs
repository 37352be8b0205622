use std::collections::HashMap;
use crate::gravity::Fall;
use crate::piece::Piece;
use crate::position::BoardPos;
use crate::refill::Spawn;

/// How one piece changed during a resolve.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeInfo {
    was_created: bool,
    creation_time: usize,
    from_pos: BoardPos,
    to_pos: BoardPos
}

impl ChangeInfo {

    /// Describes an existing piece that moved from one cell to another.
    pub fn moved(from_pos: BoardPos, to_pos: BoardPos) -> ChangeInfo {
        ChangeInfo { was_created: false, creation_time: 0, from_pos, to_pos }
    }

    /// Describes a new piece.
    ///
    /// # Arguments
    ///
    /// * `creation_time` - the order of the piece among those created in the same resolve
    /// * `from_pos` - where the piece enters from, above the board
    /// * `to_pos` - the cell the piece was placed in
    pub fn created(creation_time: usize, from_pos: BoardPos, to_pos: BoardPos) -> ChangeInfo {
        ChangeInfo { was_created: true, creation_time, from_pos, to_pos }
    }

    /// Checks if the piece did not exist before the resolve.
    pub fn was_created(&self) -> bool {
        self.was_created
    }

    /// Gets the creation order of a new piece. Always zero for moved pieces.
    pub fn creation_time(&self) -> usize {
        self.creation_time
    }

    /// Gets where the piece came from.
    pub fn from_pos(&self) -> BoardPos {
        self.from_pos
    }

    /// Gets where the piece ended up.
    pub fn to_pos(&self) -> BoardPos {
        self.to_pos
    }

}

impl From<Fall> for ChangeInfo {
    fn from(fall: Fall) -> Self {
        ChangeInfo::moved(fall.from, fall.to)
    }
}

impl From<Spawn> for ChangeInfo {
    fn from(spawn: Spawn) -> Self {
        ChangeInfo::created(spawn.creation_time, spawn.from, spawn.to)
    }
}

/// Everything a single resolve changed on a board.
///
/// Every piece that moved or was created has a [ChangeInfo]. Pieces that
/// stayed put are left out. Cleared pieces are listed separately, since they
/// no longer have a position.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ResolveResult {
    changes: HashMap<Piece, ChangeInfo>,
    cleared: Vec<Piece>
}

impl ResolveResult {

    pub(crate) fn new(cleared: Vec<Piece>, falls: Vec<Fall>, spawns: Vec<Spawn>) -> ResolveResult {
        let changes = falls.into_iter().map(|fall| (fall.piece, ChangeInfo::from(fall)))
            .chain(spawns.into_iter().map(|spawn| (spawn.piece, ChangeInfo::from(spawn))))
            .collect();
        ResolveResult { changes, cleared }
    }

    /// Checks if the resolve changed nothing.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.cleared.is_empty()
    }

    /// Gets the number of pieces that moved or were created.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Gets how a piece changed, if it did.
    ///
    /// # Arguments
    ///
    /// * `piece` - the piece to look up
    pub fn get(&self, piece: &Piece) -> Option<&ChangeInfo> {
        self.changes.get(piece)
    }

    /// Returns an iterator of every changed piece, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item=(&Piece, &ChangeInfo)> {
        self.changes.iter()
    }

    /// Gets the pieces that were removed from the board, ordered by the cell
    /// they were removed from.
    pub fn cleared(&self) -> &[Piece] {
        &self.cleared[..]
    }

    /// Gets the new pieces in the order they were created.
    pub fn created(&self) -> Vec<(Piece, ChangeInfo)> {
        let mut created: Vec<(Piece, ChangeInfo)> = self.changes.iter()
            .filter(|(_, change)| change.was_created())
            .map(|(&piece, &change)| (piece, change))
            .collect();
        created.sort_by_key(|(_, change)| change.creation_time());
        created
    }

    /// Gets the existing pieces that moved, ordered by the cell they moved from.
    pub fn moved(&self) -> Vec<(Piece, ChangeInfo)> {
        let mut moved: Vec<(Piece, ChangeInfo)> = self.changes.iter()
            .filter(|(_, change)| !change.was_created())
            .map(|(&piece, &change)| (piece, change))
            .collect();
        moved.sort_by_key(|(_, change)| change.from_pos());
        moved
    }

}
