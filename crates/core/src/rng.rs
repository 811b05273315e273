//! RNG module - uniform random piece generation
//!
//! Every draw picks a shape uniformly from the catalog and, independently,
//! a color uniformly from the palette. There is no bag and no repeat
//! protection. A seeded source replays the same sequence, which the tests
//! and benches rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::shapes::{random_color, random_shape, Shape};
use crate::types::{ColorIndex, PieceKind};

/// One draw from the piece source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDraw {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: ColorIndex,
}

/// Random source for new pieces
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl PieceSource {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seed this source was built with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw a shape and an independent color
    pub fn draw(&mut self) -> PieceDraw {
        let (kind, shape) = random_shape(&mut self.rng);
        let color = random_color(&mut self.rng);
        PieceDraw { kind, shape, color }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE_SIZE;

    #[test]
    fn test_source_deterministic() {
        let mut a = PieceSource::new(12345);
        let mut b = PieceSource::new(12345);

        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_source_different_seeds_diverge() {
        let mut a = PieceSource::new(12345);
        let mut b = PieceSource::new(54321);

        let seq_a: Vec<_> = (0..32).map(|_| a.draw()).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.draw()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_draws_cover_catalog_and_palette() {
        let mut source = PieceSource::new(7);
        let mut kinds = [false; 7];
        let mut colors = [false; PALETTE_SIZE as usize];

        for _ in 0..2000 {
            let d = source.draw();
            kinds[d.kind.index()] = true;
            colors[d.color as usize] = true;
            assert!(d.color < PALETTE_SIZE);
        }

        assert!(kinds.iter().all(|&seen| seen));
        assert!(colors.iter().all(|&seen| seen));
    }

    #[test]
    fn test_shape_and_color_are_not_coupled() {
        // With independent draws, some piece must carry a color other than
        // the one matching its catalog position.
        let mut source = PieceSource::new(99);
        let decoupled = (0..200).any(|_| {
            let d = source.draw();
            d.color as usize != d.kind.index()
        });
        assert!(decoupled);
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(PieceSource::new(5).seed(), Some(5));
        assert_eq!(PieceSource::from_entropy().seed(), None);
    }
}
