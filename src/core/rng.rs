//! Deterministic randomness for piece generation.
//!
//! Pieces are drawn uniformly and independently over the 7 shapes. This is
//! deliberately not a "bag" randomizer: runs of the same shape and long
//! droughts are possible, and tests must not assume bag fairness.

use crate::types::PieceKind;

/// Simple LCG (Numerical Recipes constants). Deterministic for a given seed,
/// so whole games replay identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would only emit the additive constant's orbit; nudge it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform independent piece generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGen {
    rng: SimpleRng,
}

impl PieceGen {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind.
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current generator state (usable to replay the remaining sequence).
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGen {
    fn default() -> Self {
        Self::new(1)
    }
}
