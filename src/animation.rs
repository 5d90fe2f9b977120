//! Fixed LED flash patterns.
//!
//! An [`Animation`] is a list of frames with hold times, repeated a number of
//! times and optionally followed by a landing step. It only describes what to
//! show; [`ReactionGame::play_animation`](crate::ReactionGame::play_animation)
//! drives the pins.

use crate::config::GameConfig;
use crate::types::{AnimationError, AnimationStep, Channel, LedFrame};
use heapless::Vec;

/// Step capacity of the start animation.
pub const START_STEPS: usize = 8;

/// Step capacity of the fail animation.
pub const FAIL_STEPS: usize = 2;

/// A repeated sequence of LED frames.
///
/// # Type Parameters
/// * `N` - Maximum number of steps this animation can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation<const N: usize> {
    steps: Vec<AnimationStep, N>,
    repeats: u32,
    landing: Option<AnimationStep>,
}

impl<const N: usize> Animation<N> {
    /// Creates a new animation builder.
    pub fn builder() -> AnimationBuilder<N> {
        AnimationBuilder::new()
    }

    fn canned(steps: &[AnimationStep], repeats: u32, landing: Option<AnimationStep>) -> Self {
        Self {
            steps: steps.iter().copied().collect(),
            repeats,
            landing,
        }
    }

    /// Every step in play order: all repeats, then the landing step.
    pub fn iter(&self) -> impl Iterator<Item = AnimationStep> + '_ {
        (0..self.repeats)
            .flat_map(move |_| self.steps.iter().copied())
            .chain(self.landing)
    }

    /// Total play time in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.iter().map(|step| u64::from(step.duration_ms)).sum()
    }

    /// Frame left showing once the animation has finished.
    pub fn final_frame(&self) -> LedFrame {
        self.iter().last().map_or(LedFrame::DARK, |step| step.frame)
    }

    /// Returns the number of steps in one repetition.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn landing(&self) -> Option<AnimationStep> {
        self.landing
    }

    /// Returns a reference to the step at the given index.
    pub fn get_step(&self, index: usize) -> Option<&AnimationStep> {
        self.steps.get(index)
    }
}

impl Animation<START_STEPS> {
    /// Game start: light the LEDs one by one in channel order, put them out
    /// one by one in the same order, repeat, then hold dark for the pause.
    pub fn start(config: &GameConfig) -> Self {
        let step_ms = config.start_step_ms;
        let mut steps = [AnimationStep::new(LedFrame::DARK, step_ms); START_STEPS];

        let mut frame = LedFrame::DARK;
        for channel in Channel::ALL {
            frame = frame.with(channel);
            steps[channel.index()].frame = frame;
        }
        for channel in Channel::ALL {
            frame = frame.without(channel);
            steps[Channel::ALL.len() + channel.index()].frame = frame;
        }

        Self::canned(
            &steps,
            config.animation_repeats,
            Some(AnimationStep::new(LedFrame::DARK, config.start_pause_ms)),
        )
    }
}

impl Animation<FAIL_STEPS> {
    /// Game over: flash all four LEDs together, then settle dark.
    pub fn fail(config: &GameConfig) -> Self {
        Self::canned(
            &[
                AnimationStep::new(LedFrame::ALL, config.fail_step_ms),
                AnimationStep::new(LedFrame::DARK, config.fail_step_ms),
            ],
            config.animation_repeats,
            Some(AnimationStep::new(LedFrame::DARK, 0)),
        )
    }
}

/// Builder for constructing validated animations.
#[derive(Debug)]
pub struct AnimationBuilder<const N: usize> {
    steps: Vec<AnimationStep, N>,
    repeats: u32,
    landing: Option<AnimationStep>,
}

impl<const N: usize> AnimationBuilder<N> {
    /// Creates a new empty builder that plays once.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            repeats: 1,
            landing: None,
        }
    }

    /// Adds a step.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The animation already holds `N` steps
    pub fn step(mut self, frame: LedFrame, duration_ms: u32) -> Result<Self, AnimationError> {
        self.steps
            .push(AnimationStep::new(frame, duration_ms))
            .map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets how many times the steps are played. Default is 1.
    pub fn repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets a step shown once after the last repetition.
    pub fn landing(mut self, frame: LedFrame, duration_ms: u32) -> Self {
        self.landing = Some(AnimationStep::new(frame, duration_ms));
        self
    }

    /// Builds and validates the animation.
    ///
    /// # Errors
    /// * `EmptyAnimation` - No steps were added
    /// * `ZeroRepeats` - Repeat count is zero
    pub fn build(self) -> Result<Animation<N>, AnimationError> {
        if self.steps.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }
        if self.repeats == 0 {
            return Err(AnimationError::ZeroRepeats);
        }

        Ok(Animation {
            steps: self.steps,
            repeats: self.repeats,
            landing: self.landing,
        })
    }
}

impl<const N: usize> Default for AnimationBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
