//! Core types shared by the game components.

/// Number of LED/button pairs on the board.
pub const CHANNEL_COUNT: usize = 4;

/// One of the four LED/button pairs.
///
/// A `Channel` is always in `0..=3`; there is no way to construct one outside
/// that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel(0), Channel(1), Channel(2), Channel(3)];

    /// Creates a channel, returning `None` if `index` is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < CHANNEL_COUNT {
            Some(Channel(index))
        } else {
            None
        }
    }

    /// Keeps only the bottom two bits, so any input yields a valid channel.
    #[inline]
    pub(crate) const fn from_low_bits(bits: u8) -> Self {
        Channel(bits & 0b11)
    }

    /// Zero-based channel index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit for this channel in a [`LedFrame`] or [`ButtonSet`].
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = ChannelError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Channel::new(index).ok_or(ChannelError::OutOfRange(index))
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> u8 {
        channel.0
    }
}

/// Channel construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Index is not in `0..=3`.
    OutOfRange(u8),
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::OutOfRange(index) => {
                write!(f, "channel index {} out of range (expected 0-3)", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}

/// Immutable mapping from [`Channel`] to the physical pin driving it.
///
/// The pin type is whatever the [`PinDriver`](crate::driver::PinDriver)
/// implementation uses to identify a pin, typically a small `(port, pin)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinBinding<P> {
    pins: [P; CHANNEL_COUNT],
}

impl<P: Copy> PinBinding<P> {
    /// Creates a binding; `pins[i]` drives channel `i`.
    pub const fn new(pins: [P; CHANNEL_COUNT]) -> Self {
        Self { pins }
    }

    /// Returns the pin bound to `channel`.
    #[inline]
    pub fn pin(&self, channel: Channel) -> P {
        self.pins[channel.index()]
    }

    /// Iterates over `(channel, pin)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, P)> + '_ {
        Channel::ALL
            .into_iter()
            .map(move |channel| (channel, self.pin(channel)))
    }
}

/// Which LEDs are lit, one bit per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedFrame(u8);

impl LedFrame {
    /// All LEDs dark.
    pub const DARK: LedFrame = LedFrame(0);

    /// All four LEDs lit.
    pub const ALL: LedFrame = LedFrame(0x0F);

    /// Creates a frame from a channel bitmask; bits above channel 3 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        LedFrame(bits & 0x0F)
    }

    /// A frame with only `channel` lit.
    pub const fn single(channel: Channel) -> Self {
        LedFrame(channel.mask())
    }

    /// Returns this frame with `channel` lit.
    pub const fn with(self, channel: Channel) -> Self {
        LedFrame(self.0 | channel.mask())
    }

    /// Returns this frame with `channel` dark.
    pub const fn without(self, channel: Channel) -> Self {
        LedFrame(self.0 & !channel.mask())
    }

    pub const fn is_lit(self, channel: Channel) -> bool {
        self.0 & channel.mask() != 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Channels whose state differs between `self` and `other`.
    pub const fn changed(self, other: LedFrame) -> u8 {
        self.0 ^ other.0
    }
}

/// Set of currently pressed buttons, one bit per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    /// Creates a set from a channel bitmask; bits above channel 3 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        ButtonSet(bits & 0x0F)
    }

    pub fn insert(&mut self, channel: Channel) {
        self.0 |= channel.mask();
    }

    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Lowest-indexed pressed channel, which is the one a round acts on when
    /// several buttons are held.
    pub fn lowest(self) -> Option<Channel> {
        if self.0 == 0 {
            None
        } else {
            Some(Channel::from_low_bits(self.0.trailing_zeros() as u8))
        }
    }
}

/// How a single round resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// The target channel's button was pressed in time.
    Hit,

    /// A different button was pressed first.
    Miss,

    /// No button was pressed before the reaction budget ran out.
    Timeout,
}

impl RoundOutcome {
    /// Binary success flag: `true` only for [`RoundOutcome::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, RoundOutcome::Hit)
    }
}

/// Reaction-time difficulty levels, from most to least forgiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Next level in the progression; `Hard` stays `Hard`.
    pub const fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    pub(crate) const fn level(self) -> usize {
        self as usize
    }
}

/// A single step in an LED animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationStep {
    /// LEDs lit during this step.
    pub frame: LedFrame,

    /// How long the frame is held, in milliseconds.
    pub duration_ms: u32,
}

impl AnimationStep {
    /// Creates a new animation step.
    #[inline]
    pub const fn new(frame: LedFrame, duration_ms: u32) -> Self {
        Self { frame, duration_ms }
    }
}

/// Animation validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// No steps provided.
    EmptyAnimation,

    /// Repeat count of zero.
    ZeroRepeats,

    /// Animation capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::EmptyAnimation => {
                write!(f, "animation must have at least one step")
            }
            AnimationError::ZeroRepeats => {
                write!(f, "animation must repeat at least once")
            }
            AnimationError::CapacityExceeded => {
                write!(f, "animation capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}
