//! Bounded random rolls for enemies, players, and roll previews.
//!
//! [`Randomizer`] is the seam the rest of the game rolls through. The runtime
//! owns two independent generators: one for outcome rolls and one for the
//! cosmetic roll preview, so animation frames never shift an outcome.

/// Source of bounded random integers.
pub trait Randomizer: Send {
    /// Next raw 32-bit value from the underlying stream.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[1, max]` inclusive.
    ///
    /// `max == 0` is treated as `1`; catalogs reject zero stats, so the game
    /// never asks for it.
    fn int_in_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 1;
        }

        // Rejection sampling keeps the distribution uniform for any `max`.
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let value = self.next_u32();
            if value < zone {
                return value % max + 1;
            }
        }
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn int_in_range(&mut self, max: u32) -> u32 {
        (**self).int_in_range(max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64 bits of state, 32-bit output. Same seed, same
/// sequence, which keeps sessions reproducible when `GAME_SEED` is set.
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        // Mix the seed once so nearby seeds start far apart.
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Randomizer for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

/// Derive the preview generator's seed from the outcome seed.
pub fn preview_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
