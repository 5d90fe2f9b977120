//! Score value and its blink-count encoding.
//!
//! A score is shown as three runs of blinks: hundreds, then tens, then units,
//! each on its own channel (see [`DigitChannels`]). A zero digit produces no
//! blinks at all.

use crate::config::DigitChannels;
use crate::types::Channel;

/// Accumulated game score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    pub const fn new(value: u32) -> Self {
        Score(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Adds one point, saturating at `u32::MAX`.
    pub const fn increment(self) -> Self {
        Score(self.0.saturating_add(1))
    }

    /// Splits the score for display.
    ///
    /// `hundreds` is `score / 100` and is not capped, so scores of 1000 and
    /// above give a hundreds count above nine.
    pub const fn digits(self) -> ScoreDigits {
        ScoreDigits {
            hundreds: self.0 / 100,
            tens: self.0 / 10 % 10,
            units: self.0 % 10,
        }
    }
}

impl From<u32> for Score {
    fn from(value: u32) -> Self {
        Score(value)
    }
}

/// Blink counts for each displayed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScoreDigits {
    pub hundreds: u32,
    pub tens: u32,
    pub units: u32,
}

impl ScoreDigits {
    /// `(channel, blink count)` pairs in display order.
    pub fn blink_plan(self, channels: &DigitChannels) -> [(Channel, u32); 3] {
        [
            (channels.hundreds, self.hundreds),
            (channels.tens, self.tens),
            (channels.units, self.units),
        ]
    }

    /// Total number of blinks across all digits.
    pub fn total_blinks(self) -> u64 {
        u64::from(self.hundreds) + u64::from(self.tens) + u64::from(self.units)
    }
}
