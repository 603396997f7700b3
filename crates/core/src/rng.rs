//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm.
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws pop from the end of the bag until it is empty, then a new bag is shuffled.
//!
//! The bag is an explicit value owned by the game state, seeded so games are reproducible.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates, selecting from the end
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceBag {
    /// Kinds left in the current bag; draws pop from the end
    bag: ArrayVec<PieceKind, 7>,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag generator with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }

    /// Draw the next piece kind, reshuffling a fresh bag when the current one is empty
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Number of kinds left before the bag is reshuffled
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Current RNG state, usable as the seed of a fresh generator (restart)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..10 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut bag = PieceBag::new(1);

        let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.draw()).collect();
        drawn.sort_by_key(|k| *k as u8);

        assert_eq!(drawn, PieceKind::ALL.to_vec());
        assert_eq!(bag.remaining(), 0);
    }

    #[test]
    fn test_bag_every_cycle_is_a_permutation() {
        for seed in [1, 2, 42, 999, 0xDEAD_BEEF] {
            let mut bag = PieceBag::new(seed);
            for _cycle in 0..20 {
                let mut seen = [false; 7];
                for _ in 0..7 {
                    let kind = bag.draw();
                    let i = kind as usize;
                    assert!(!seen[i], "{:?} repeated within a bag (seed {})", kind, seed);
                    seen[i] = true;
                }
                assert!(seen.iter().all(|s| *s));
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceBag::new(77);
        let mut b = PieceBag::new(77);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
