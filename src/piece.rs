use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The matching category of a piece. Two pieces match when their types are equal.
pub type PieceType = u32;

/// A stable handle for one piece. Handles are never reused within a board,
/// so a newly spawned piece never shares a handle with a cleared one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub(crate) usize);

impl PieceId {

    /// Gets the raw index behind this handle.
    pub fn index(&self) -> usize {
        self.0
    }

}

/// An individual piece on a board that belongs to a category.
///
/// Pieces are identified by their handle, not by their type. Two pieces of
/// the same type in different cells are different pieces, and a piece keeps
/// its handle when it falls.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    id: PieceId,
    piece_type: PieceType
}

impl Piece {
    pub(crate) fn new(id: PieceId, piece_type: PieceType) -> Piece {
        Piece { id, piece_type }
    }

    /// Gets the handle that identifies this piece.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Gets the type that this piece belongs to.
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    /// Checks if another piece can connect to this one.
    ///
    /// # Arguments
    ///
    /// * `other` - the piece to compare types with
    pub fn matches(&self, other: &Piece) -> bool {
        self.piece_type == other.piece_type
    }

}

/// Produces the types of pieces that refill a board after a clear.
///
/// The board asks for one type per vacancy and places no constraint on
/// the distribution of returned types.
pub trait PieceFactory {

    /// Produces the type of the next piece to spawn.
    fn next_type(&mut self) -> PieceType;

}

impl<F: PieceFactory + ?Sized> PieceFactory for &mut F {
    fn next_type(&mut self) -> PieceType {
        (**self).next_type()
    }
}

/// Always produces the same piece type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FixedPieceFactory(pub PieceType);

impl PieceFactory for FixedPieceFactory {
    fn next_type(&mut self) -> PieceType {
        self.0
    }
}

/// Produces piece types from a fixed list, starting over when it runs out.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CyclePieceFactory {
    types: Vec<PieceType>,
    next: usize
}

impl CyclePieceFactory {

    /// Creates a factory that repeats the given types in order. Returns
    /// `None` if no types are given.
    ///
    /// # Arguments
    ///
    /// * `types` - the types to hand out, in order
    pub fn new(types: Vec<PieceType>) -> Option<CyclePieceFactory> {
        if types.is_empty() {
            return None;
        }

        Some(CyclePieceFactory { types, next: 0 })
    }

}

impl PieceFactory for CyclePieceFactory {
    fn next_type(&mut self) -> PieceType {
        let piece_type = self.types[self.next];
        self.next = (self.next + 1) % self.types.len();
        piece_type
    }
}

/// Draws piece types uniformly from `0..type_count`.
#[derive(Clone, Debug)]
pub struct RandomPieceFactory {
    type_count: PieceType,
    rng: StdRng
}

impl RandomPieceFactory {

    /// Creates a factory with a fixed seed, so the same seed always produces the
    /// same sequence of types. Returns `None` if `type_count` is zero.
    ///
    /// # Arguments
    ///
    /// * `type_count` - the number of distinct piece types to draw from
    /// * `seed` - the seed of the random number generator
    pub fn seeded(type_count: PieceType, seed: u64) -> Option<RandomPieceFactory> {
        RandomPieceFactory::with_rng(type_count, StdRng::seed_from_u64(seed))
    }

    /// Creates a factory seeded from the operating system's entropy source.
    /// Returns `None` if `type_count` is zero.
    ///
    /// # Arguments
    ///
    /// * `type_count` - the number of distinct piece types to draw from
    pub fn from_entropy(type_count: PieceType) -> Option<RandomPieceFactory> {
        RandomPieceFactory::with_rng(type_count, StdRng::from_entropy())
    }

    /// Gets the number of distinct types this factory draws from.
    pub fn type_count(&self) -> PieceType {
        self.type_count
    }

    fn with_rng(type_count: PieceType, rng: StdRng) -> Option<RandomPieceFactory> {
        if type_count == 0 {
            return None;
        }

        Some(RandomPieceFactory { type_count, rng })
    }

}

impl PieceFactory for RandomPieceFactory {
    fn next_type(&mut self) -> PieceType {
        self.rng.gen_range(0..self.type_count)
    }
}

#[cfg(test)]
mod tests {
    use crate::piece::{CyclePieceFactory, FixedPieceFactory, Piece, PieceFactory, PieceId, RandomPieceFactory};

    #[test]
    fn matches_same_type_different_id_true() {
        let first = Piece::new(PieceId(0), 3);
        let second = Piece::new(PieceId(1), 3);
        assert!(first.matches(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn matches_different_type_false() {
        let first = Piece::new(PieceId(0), 3);
        let second = Piece::new(PieceId(1), 4);
        assert!(!first.matches(&second));
    }

    #[test]
    fn fixed_factory_always_same_type() {
        let mut factory = FixedPieceFactory(7);
        assert_eq!(7, factory.next_type());
        assert_eq!(7, factory.next_type());
    }

    #[test]
    fn cycle_factory_empty_none() {
        assert_eq!(None, CyclePieceFactory::new(Vec::new()));
    }

    #[test]
    fn cycle_factory_repeats_in_order() {
        let mut factory = CyclePieceFactory::new(vec![1, 2, 3]).unwrap();
        let types: Vec<u32> = (0..7).map(|_| factory.next_type()).collect();
        assert_eq!(vec![1, 2, 3, 1, 2, 3, 1], types);
    }

    #[test]
    fn random_factory_zero_types_none() {
        assert!(RandomPieceFactory::seeded(0, 1).is_none());
        assert!(RandomPieceFactory::from_entropy(0).is_none());
    }

    #[test]
    fn random_factory_types_in_range() {
        let mut factory = RandomPieceFactory::seeded(4, 99).unwrap();
        assert_eq!(4, factory.type_count());
        assert!((0..200).all(|_| factory.next_type() < 4));
    }

    #[test]
    fn random_factory_same_seed_same_sequence() {
        let mut first = RandomPieceFactory::seeded(6, 42).unwrap();
        let mut second = RandomPieceFactory::seeded(6, 42).unwrap();
        let first_types: Vec<u32> = (0..50).map(|_| first.next_type()).collect();
        let second_types: Vec<u32> = (0..50).map(|_| second.next_type()).collect();
        assert_eq!(first_types, second_types);
    }

    #[test]
    fn borrowed_factory_advances_owner() {
        fn draw<F: PieceFactory>(mut factory: F) -> u32 {
            factory.next_type()
        }

        let mut factory = CyclePieceFactory::new(vec![1, 2]).unwrap();
        assert_eq!(1, draw(&mut factory));
        assert_eq!(2, factory.next_type());
    }
}
