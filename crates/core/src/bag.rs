//! Bag module - 7-bag random piece generation
//!
//! Each bag holds one of each piece kind in random order. Pieces are drawn
//! until the bag is empty, then a fresh bag is generated, so a kind can never
//! repeat before all seven have been seen.
//!
//! The RNG is seedable so a game can be replayed exactly (tests rely on this).

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Remaining pieces of the current bag; drawn from the back
    queue: Vec<PieceKind>,
    rng: StdRng,
}

impl BagRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a randomizer seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a randomizer around an already seeded RNG
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            queue: Vec::with_capacity(PieceKind::ALL.len()),
            rng,
        }
    }

    /// Generate a new bag, replacing whatever is left of the current one.
    ///
    /// Picks a random index from a shrinking working set until it is empty,
    /// which yields every kind exactly once.
    pub fn refill(&mut self) {
        let mut working = PieceKind::ALL.to_vec();
        self.queue.clear();
        while !working.is_empty() {
            let idx = self.rng.gen_range(0..working.len());
            self.queue.push(working.remove(idx));
        }
        trace!("bag refilled: {:?}", self.queue);
    }

    /// Draw the next piece, refilling first when the bag is empty.
    ///
    /// Pieces come off the back of the queue, so the last kind generated
    /// by `refill` is the first one played.
    pub fn next(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.queue.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Pieces left in the current bag, in generation order
    pub fn remaining(&self) -> &[PieceKind] {
        &self.queue
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut kinds: Vec<PieceKind>) -> Vec<PieceKind> {
        kinds.sort();
        kinds
    }

    #[test]
    fn test_starts_empty() {
        let bag = BagRandomizer::new(1);
        assert!(bag.remaining().is_empty());
    }

    #[test]
    fn test_refill_is_a_permutation() {
        let mut bag = BagRandomizer::new(7);
        bag.refill();
        assert_eq!(sorted(bag.remaining().to_vec()), PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_refill_replaces_leftovers() {
        let mut bag = BagRandomizer::new(7);
        bag.next();
        bag.next();
        assert_eq!(bag.remaining().len(), 5);

        bag.refill();
        assert_eq!(bag.remaining().len(), 7);
    }

    #[test]
    fn test_next_draws_from_back() {
        let mut bag = BagRandomizer::new(3);
        bag.refill();
        let last = *bag.remaining().last().unwrap();
        assert_eq!(bag.next(), last);
    }

    #[test]
    fn test_every_bag_is_fair() {
        let mut bag = BagRandomizer::new(12345);
        for _ in 0..50 {
            let drawn: Vec<_> = (0..7).map(|_| bag.next()).collect();
            assert_eq!(sorted(drawn), PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let mut a = BagRandomizer::new(99);
        let mut b = BagRandomizer::new(99);
        for _ in 0..21 {
            assert_eq!(a.next(), b.next());
        }
    }
}
