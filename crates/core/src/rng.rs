//! Piece sources - where the next spawned piece kind comes from
//!
//! [`SimpleRng`] picks uniformly among the seven kinds with a seeded LCG, so a
//! seed fully determines the piece sequence. [`FixedPiece`] always yields the
//! same kind, for replays and scripted scenarios.

use crate::types::PieceKind;

/// Supplies the kind of every newly spawned piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
    seed: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed, seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with short periods.
        (self.next_u32() >> 16) % max
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Always yields the same piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPiece(pub PieceKind);

impl PieceSource for FixedPiece {
    fn next_kind(&mut self) -> PieceKind {
        self.0
    }
}
