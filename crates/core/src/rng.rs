//! RNG module - uniform random figure generation
//!
//! Every spawn draws a kind uniformly over the seven kinds (no bag), so the
//! same kind can repeat. A small LCG keeps games reproducible from a seed.

use std::collections::VecDeque;

use crate::figure::Figure;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
    /// Scales by the high bits; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Produces fresh figures and keeps the lookahead queue topped up
#[derive(Debug, Clone)]
pub struct FigureGenerator {
    rng: SimpleRng,
}

impl FigureGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// A uniformly random kind at the spawn anchor, rotation 0
    pub fn spawn(&mut self) -> Figure {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Figure::new(PieceKind::ALL[index])
    }

    /// Restore the queue after a dequeue
    ///
    /// An empty queue is bulk-filled to `target_len`; otherwise exactly one
    /// figure is appended.
    pub fn refill_queue(&mut self, queue: &mut VecDeque<Figure>, target_len: usize) {
        if queue.is_empty() {
            for _ in 0..target_len {
                queue.push_back(self.spawn());
            }
        } else {
            queue.push_back(self.spawn());
        }
    }
}

impl Default for FigureGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
