//! Noise-seeded pseudo-random channel selection.
//!
//! Every draw XORs [`SAMPLE_COUNT`] raw noise samples into a 16-bit
//! accumulator, runs one linear-congruential step over it ([`mix_seed`]) and
//! folds the result down to the requested range. Nothing carries over between
//! draws except an optional caller-supplied preload.

#[cfg(not(feature = "defmt"))]
#[allow(unused_imports)]
use log::{debug, trace};

#[cfg(feature = "defmt")]
#[allow(unused_imports)]
use defmt::{debug, trace};

use crate::driver::NoiseSource;
use crate::types::Channel;

/// Noise samples folded into each seed.
pub const SAMPLE_COUNT: usize = 25;

/// LCG multiplier applied to the accumulated seed.
pub const LCG_MULTIPLIER: u16 = 2053;

/// LCG increment applied to the accumulated seed.
pub const LCG_INCREMENT: u16 = 13849;

/// One linear-congruential step, `2053 * seed + 13849` modulo 2^16.
#[inline]
pub const fn mix_seed(seed: u16) -> u16 {
    seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}

/// Folds a mixed seed down to a channel by XOR-ing bytes, nibbles and bit
/// pairs together.
pub const fn fold_channel(seed: u16) -> Channel {
    let mut temp = (seed ^ (seed >> 8)) as u8;
    temp ^= temp >> 4;
    Channel::from_low_bits(temp ^ (temp >> 2))
}

/// Folds a mixed seed and scales it into `[0, range)`.
///
/// `range == 0` yields 0. The scaling is `floor(range * folded / 65535)`,
/// clamped so a fully-set fold still lands below `range`.
pub const fn fold_range(seed: u16, range: u16) -> u16 {
    if range == 0 {
        return 0;
    }

    let mut temp = seed;
    temp ^= temp >> 8;
    temp ^= temp >> 4;

    let scaled = (range as u32 * temp as u32 / u16::MAX as u32) as u16;
    if scaled >= range { range - 1 } else { scaled }
}

/// Draws random values from an analog noise source.
///
/// The accumulator starts from zero on every draw unless a preload was given
/// with [`EntropySampler::with_preload`]. A preload should be a genuinely
/// unpredictable value (e.g. a free-running timer captured at a button press);
/// it is XOR-ed in before the samples and never updated.
pub struct EntropySampler<N: NoiseSource> {
    source: N,
    preload: u16,
}

impl<N: NoiseSource> EntropySampler<N> {
    /// Creates a sampler with a zeroed accumulator.
    pub fn new(source: N) -> Self {
        Self { source, preload: 0 }
    }

    /// Creates a sampler whose accumulator starts at `preload`.
    pub fn with_preload(source: N, preload: u16) -> Self {
        Self { source, preload }
    }

    /// Draws a uniformly distributed channel.
    pub fn next_channel(&mut self) -> Channel {
        let seed = mix_seed(self.accumulate());
        let channel = fold_channel(seed);
        trace!("entropy: seed={} channel={}", seed, channel.index());
        channel
    }

    /// Draws an approximately uniform value in `[0, range)`; 0 when `range` is 0.
    pub fn next_in_range(&mut self, range: u16) -> u16 {
        let seed = mix_seed(self.accumulate());
        fold_range(seed, range)
    }

    /// Returns the underlying noise source.
    pub fn into_inner(self) -> N {
        self.source
    }

    fn accumulate(&mut self) -> u16 {
        let mut seed = self.preload;
        for _ in 0..SAMPLE_COUNT {
            seed ^= self.source.sample();
        }
        seed
    }
}
