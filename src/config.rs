//! Timing constants and per-game configuration.

use crate::driver::LedPolarity;
use crate::types::{Channel, Difficulty};

/// How long the target LED stays lit before the player may respond.
pub const SHOW_TARGET_MS: u32 = 50;

/// Interval between button polls while a round is waiting for input.
pub const POLL_INTERVAL_MS: u32 = 1;

/// Score digit blink timing.
pub const SCORE_BLINK_ON_MS: u32 = 200;
pub const SCORE_BLINK_OFF_MS: u32 = 200;

/// Delay between single-LED steps of the start animation.
pub const START_STEP_MS: u32 = 100;

/// Dark pause after the start animation.
pub const START_PAUSE_MS: u32 = 1000;

/// Half-period of the fail animation flash.
pub const FAIL_STEP_MS: u32 = 250;

/// How many times the start and fail animations repeat.
pub const ANIMATION_REPEATS: u32 = 2;

/// Reaction budgets (poll count at [`POLL_INTERVAL_MS`]) per difficulty.
pub const REACTION_BUDGET_EASY: u16 = 50;
pub const REACTION_BUDGET_MEDIUM: u16 = 10;
pub const REACTION_BUDGET_HARD: u16 = 5;

/// Which resolved rounds block until every button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleasePolicy {
    /// Wait for release after any press, hit or miss.
    #[default]
    AnyPress,

    /// Wait only after a hit; a wrong press returns immediately.
    HitOnly,
}

/// Channel assignment for the three displayed score digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitChannels {
    pub hundreds: Channel,
    pub tens: Channel,
    pub units: Channel,
}

impl Default for DigitChannels {
    fn default() -> Self {
        Self {
            hundreds: Channel::ALL[2],
            tens: Channel::ALL[1],
            units: Channel::ALL[0],
        }
    }
}

/// Tunable timings and policies for a [`ReactionGame`](crate::ReactionGame).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    pub show_target_ms: u32,
    pub blink_on_ms: u32,
    pub blink_off_ms: u32,
    pub start_step_ms: u32,
    pub start_pause_ms: u32,
    pub fail_step_ms: u32,
    pub animation_repeats: u32,
    pub reaction_budgets: [u16; 3],
    pub digit_channels: DigitChannels,
    pub polarity: LedPolarity,
    pub release_policy: ReleasePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            show_target_ms: SHOW_TARGET_MS,
            blink_on_ms: SCORE_BLINK_ON_MS,
            blink_off_ms: SCORE_BLINK_OFF_MS,
            start_step_ms: START_STEP_MS,
            start_pause_ms: START_PAUSE_MS,
            fail_step_ms: FAIL_STEP_MS,
            animation_repeats: ANIMATION_REPEATS,
            reaction_budgets: [
                REACTION_BUDGET_EASY,
                REACTION_BUDGET_MEDIUM,
                REACTION_BUDGET_HARD,
            ],
            digit_channels: DigitChannels::default(),
            polarity: LedPolarity::default(),
            release_policy: ReleasePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Creates a builder starting from the default configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Reaction budget for `difficulty`.
    #[inline]
    pub fn budget_for(&self, difficulty: Difficulty) -> u16 {
        self.reaction_budgets[difficulty.level()]
    }
}

/// Timings that must stay non-zero for the LEDs to be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingField {
    ShowTarget,
    BlinkOn,
    StartStep,
    FailStep,
}

impl TimingField {
    /// Name of the matching [`GameConfig`] field.
    pub const fn name(self) -> &'static str {
        match self {
            TimingField::ShowTarget => "show_target_ms",
            TimingField::BlinkOn => "blink_on_ms",
            TimingField::StartStep => "start_step_ms",
            TimingField::FailStep => "fail_step_ms",
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two score digits were assigned the same channel.
    DuplicateDigitChannel(Channel),

    /// A display timing that must be visible was set to zero.
    ZeroDuration(TimingField),

    /// Start and fail animations set to play zero times.
    ZeroRepeats,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DuplicateDigitChannel(channel) => {
                write!(f, "channel {} assigned to more than one score digit", channel.index())
            }
            ConfigError::ZeroDuration(field) => {
                write!(f, "{} must be non-zero", field.name())
            }
            ConfigError::ZeroRepeats => {
                write!(f, "animation_repeats must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Builder for validated [`GameConfig`] values.
#[derive(Debug)]
pub struct ConfigBuilder {
    config: GameConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Sets how long the target LED is shown.
    pub fn show_target_ms(mut self, ms: u32) -> Self {
        self.config.show_target_ms = ms;
        self
    }

    /// Sets score blink on/off times.
    pub fn blink(mut self, on_ms: u32, off_ms: u32) -> Self {
        self.config.blink_on_ms = on_ms;
        self.config.blink_off_ms = off_ms;
        self
    }

    /// Sets start animation step and trailing pause.
    pub fn start_animation(mut self, step_ms: u32, pause_ms: u32) -> Self {
        self.config.start_step_ms = step_ms;
        self.config.start_pause_ms = pause_ms;
        self
    }

    pub fn fail_step_ms(mut self, ms: u32) -> Self {
        self.config.fail_step_ms = ms;
        self
    }

    pub fn animation_repeats(mut self, repeats: u32) -> Self {
        self.config.animation_repeats = repeats;
        self
    }

    /// Overrides the reaction budget of one difficulty level.
    pub fn reaction_budget(mut self, difficulty: Difficulty, budget: u16) -> Self {
        self.config.reaction_budgets[difficulty.level()] = budget;
        self
    }

    pub fn digit_channels(mut self, channels: DigitChannels) -> Self {
        self.config.digit_channels = channels;
        self
    }

    pub fn polarity(mut self, polarity: LedPolarity) -> Self {
        self.config.polarity = polarity;
        self
    }

    pub fn release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.config.release_policy = policy;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `DuplicateDigitChannel` - Two digits share a channel
    /// * `ZeroDuration` - Target show time, blink on-time or an animation step is zero
    /// * `ZeroRepeats` - Animations would not play at all
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let config = self.config;
        let digits = config.digit_channels;

        if digits.hundreds == digits.tens || digits.hundreds == digits.units {
            return Err(ConfigError::DuplicateDigitChannel(digits.hundreds));
        }
        if digits.tens == digits.units {
            return Err(ConfigError::DuplicateDigitChannel(digits.tens));
        }

        let timings = [
            (TimingField::ShowTarget, config.show_target_ms),
            (TimingField::BlinkOn, config.blink_on_ms),
            (TimingField::StartStep, config.start_step_ms),
            (TimingField::FailStep, config.fail_step_ms),
        ];
        if let Some((field, _)) = timings.into_iter().find(|&(_, ms)| ms == 0) {
            return Err(ConfigError::ZeroDuration(field));
        }
        if config.animation_repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
