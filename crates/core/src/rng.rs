//! RNG module - injectable shape sources
//!
//! Spawning draws shapes from a [`ShapeSource`]. The default source picks one
//! of the seven shapes uniformly at random from a seeded LCG, so a seed fully
//! determines a game. Tests swap in [`ScriptedShapes`] to force sequences.

use crate::types::PieceKind;

/// Supplies the shape for every spawn.
pub trait ShapeSource {
    fn next_shape(&mut self) -> PieceKind;
}

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle with short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Uniform shape selection: every spawn is independent, each shape 1/7.
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
    seed: u32,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::from_index(index).unwrap_or(PieceKind::I)
    }
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of shapes, wrapping around at the end.
///
/// An empty script yields `I` pieces.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<PieceKind>,
    next: usize,
}

impl ScriptedShapes {
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            script: script.into(),
            next: 0,
        }
    }

    /// Always the same shape
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Number of shapes handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> PieceKind {
        if self.script.is_empty() {
            return PieceKind::I;
        }
        let kind = self.script[self.next % self.script.len()];
        self.next += 1;
        kind
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape(&mut self) -> PieceKind {
        (**self).next_shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_uniform_shapes_reproducible_per_seed() {
        let mut a = UniformShapes::new(99);
        let mut b = UniformShapes::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_shape(), b.next_shape());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_uniform_shapes_cover_catalog() {
        let mut source = UniformShapes::new(7);
        let mut seen = [0usize; PieceKind::COUNT];
        for _ in 0..7000 {
            seen[source.next_shape().index()] += 1;
        }
        for (i, count) in seen.iter().enumerate() {
            // Expected 1000 each; allow generous slack.
            assert!(*count > 700 && *count < 1300, "shape {i} drawn {count} times");
        }
    }

    #[test]
    fn test_scripted_shapes_wrap() {
        let mut source = ScriptedShapes::new([PieceKind::T, PieceKind::O]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_shape()).collect();
        assert_eq!(
            drawn,
            vec![
                PieceKind::T,
                PieceKind::O,
                PieceKind::T,
                PieceKind::O,
                PieceKind::T
            ]
        );
        assert_eq!(source.drawn(), 5);
    }

    #[test]
    fn test_empty_script_falls_back_to_i() {
        let mut source = ScriptedShapes::new(Vec::<PieceKind>::new());
        assert_eq!(source.next_shape(), PieceKind::I);
    }
}
