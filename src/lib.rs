#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ReactionGame`**: Owns the pins, the noise source and the delay; runs rounds, animations and score display
//! - **`PinDriver`**: Trait to implement for your GPIO block (mode switch, write, read)
//! - **`NoiseSource`**: Trait to implement for your ADC noise channel
//! - **`PinBinding`**: Immutable channel-to-pin mapping passed into every operation
//! - **`EntropySampler`**: Noise-seeded pseudo-random channel and range draws
//! - **`Animation`**: Repeated LED frame sequences with an optional landing step
//! - **`Score`**: Game score, shown as hundreds/tens/units blink runs
//! - **`GameConfig`**: Named timings, reaction budgets, digit channels and release policy
//! - **`GameAction`**: Commands that can be dispatched to a game
//!
//! Delays go through [`embedded_hal::delay::DelayNs`]. On bare metal this is a
//! busy-wait; a hosted or scheduled environment can supply a delay that yields.

pub mod animation;
pub mod command;
pub mod config;
pub mod driver;
pub mod entropy;
pub mod game;
pub mod score;
pub mod types;

pub use animation::{Animation, AnimationBuilder};
pub use command::GameAction;
pub use config::{
    ConfigBuilder, ConfigError, DigitChannels, GameConfig, ReleasePolicy, TimingField,
};
pub use driver::{LedPolarity, NoiseSource, PinDriver, PinMode, PinState};
pub use entropy::EntropySampler;
pub use game::{ReactionGame, RoundPhase, RoundReport};
pub use score::{Score, ScoreDigits};
pub use types::{
    AnimationError, AnimationStep, ButtonSet, CHANNEL_COUNT, Channel, ChannelError, Difficulty,
    LedFrame, PinBinding, RoundOutcome,
};
