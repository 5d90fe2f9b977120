//! Round controller and the game facade.
//!
//! Provides [`ReactionGame`] which owns the pin driver, the entropy sampler and
//! the delay provider, and exposes the four operations an outer game loop
//! needs: start animation, rounds, fail animation and score display. Every
//! operation takes the [`PinBinding`] explicitly and returns only after its
//! last delay has elapsed.

#[cfg(not(feature = "defmt"))]
#[allow(unused_imports)]
use log::{debug, trace};

#[cfg(feature = "defmt")]
#[allow(unused_imports)]
use defmt::{debug, trace};

use embedded_hal::delay::DelayNs;

use crate::animation::{Animation, FAIL_STEPS, START_STEPS};
use crate::command::GameAction;
use crate::config::{GameConfig, POLL_INTERVAL_MS, ReleasePolicy};
use crate::driver::{NoiseSource, PinDriver, PinMode, PinState};
use crate::entropy::EntropySampler;
use crate::score::Score;
use crate::types::{ButtonSet, Channel, LedFrame, PinBinding, RoundOutcome};

/// Phases a round moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundPhase {
    /// Target LED lit, pins are outputs.
    ShowTarget,
    /// Pins are pull-up inputs, polling once per millisecond.
    AwaitInput,
    /// Round decided.
    Resolved(RoundOutcome),
}

/// Everything observed during one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundReport {
    /// Channel the player had to press.
    pub target: Channel,

    /// Lowest-indexed button seen pressed, if any.
    pub pressed: Option<Channel>,

    /// Button polls spent before the round resolved.
    pub polls: u16,

    /// How the round resolved.
    pub outcome: RoundOutcome,
}

/// Drives one game's worth of LED/button IO.
///
/// # Type Parameters
/// * `D` - Pin driver implementation
/// * `N` - Noise source feeding the entropy sampler
/// * `T` - Delay provider
pub struct ReactionGame<D: PinDriver, N: NoiseSource, T: DelayNs> {
    driver: D,
    sampler: EntropySampler<N>,
    delay: T,
    config: GameConfig,
    shown: Option<LedFrame>,
}

impl<D: PinDriver, N: NoiseSource, T: DelayNs> ReactionGame<D, N, T> {
    /// Creates a game with a zero-initialised entropy sampler.
    pub fn new(driver: D, noise: N, delay: T, config: GameConfig) -> Self {
        Self::with_sampler(driver, EntropySampler::new(noise), delay, config)
    }

    /// Creates a game around an already configured sampler.
    pub fn with_sampler(
        driver: D,
        sampler: EntropySampler<N>,
        delay: T,
        config: GameConfig,
    ) -> Self {
        Self {
            driver,
            sampler,
            delay,
            config,
            shown: None,
        }
    }

    /// Dispatches a [`GameAction`].
    ///
    /// # Returns
    /// * `Some(outcome)` - For [`GameAction::Round`]
    /// * `None` - For display-only actions
    pub fn handle_action(
        &mut self,
        action: GameAction,
        bindings: &PinBinding<D::Pin>,
    ) -> Option<RoundOutcome> {
        match action {
            GameAction::StartAnimation => {
                self.run_start_animation(bindings);
                None
            }
            GameAction::Round(difficulty) => {
                let budget = self.config.budget_for(difficulty);
                Some(self.run_round(budget, bindings))
            }
            GameAction::FailAnimation => {
                self.run_fail_animation(bindings);
                None
            }
            GameAction::ShowScore(score) => {
                self.display_score(score, bindings);
                None
            }
        }
    }

    /// Plays the start-of-game animation. All LEDs are dark afterwards.
    pub fn run_start_animation(&mut self, bindings: &PinBinding<D::Pin>) {
        let animation = Animation::<START_STEPS>::start(&self.config);
        self.play_animation(&animation, bindings);
    }

    /// Plays the game-over animation. All LEDs are dark afterwards.
    pub fn run_fail_animation(&mut self, bindings: &PinBinding<D::Pin>) {
        let animation = Animation::<FAIL_STEPS>::fail(&self.config);
        self.play_animation(&animation, bindings);
    }

    /// Plays any animation, holding each frame for its step duration.
    pub fn play_animation<const M: usize>(
        &mut self,
        animation: &Animation<M>,
        bindings: &PinBinding<D::Pin>,
    ) {
        self.set_mode(bindings, PinMode::Output);
        for step in animation.iter() {
            self.show_frame(bindings, step.frame);
            self.delay.delay_ms(step.duration_ms);
        }
    }

    /// Runs one round against a freshly drawn target.
    ///
    /// `budget` is the number of 1 ms button polls the player gets.
    pub fn run_round(&mut self, budget: u16, bindings: &PinBinding<D::Pin>) -> RoundOutcome {
        self.play_round(budget, bindings).outcome
    }

    /// Like [`run_round`](Self::run_round) but returns the full report.
    pub fn play_round(&mut self, budget: u16, bindings: &PinBinding<D::Pin>) -> RoundReport {
        let target = self.sampler.next_channel();
        self.play_target(target, budget, bindings)
    }

    /// Runs one round against a known target.
    pub fn play_target(
        &mut self,
        target: Channel,
        budget: u16,
        bindings: &PinBinding<D::Pin>,
    ) -> RoundReport {
        debug!(
            "round {:?}: target={} budget={}",
            RoundPhase::ShowTarget,
            target.index(),
            budget
        );
        self.set_mode(bindings, PinMode::Output);
        self.show_frame(bindings, LedFrame::single(target));
        self.delay.delay_ms(self.config.show_target_ms);
        self.show_frame(bindings, LedFrame::DARK);

        trace!("round {:?}", RoundPhase::AwaitInput);
        self.set_mode(bindings, PinMode::InputPullUp);
        let mut polls: u16 = 0;
        let buttons = loop {
            if polls == budget {
                break ButtonSet::EMPTY;
            }
            let buttons = self.sample_buttons(bindings);
            polls += 1;
            self.delay.delay_ms(POLL_INTERVAL_MS);
            if !buttons.is_empty() {
                break buttons;
            }
        };

        let pressed = buttons.lowest();
        let outcome = match pressed {
            None => RoundOutcome::Timeout,
            Some(channel) if channel == target => RoundOutcome::Hit,
            Some(_) => RoundOutcome::Miss,
        };

        let wait = match self.config.release_policy {
            ReleasePolicy::AnyPress => pressed.is_some(),
            ReleasePolicy::HitOnly => outcome.is_hit(),
        };
        if wait {
            self.wait_for_release(bindings);
        }

        debug!("round {:?} after {} polls", RoundPhase::Resolved(outcome), polls);
        RoundReport {
            target,
            pressed,
            polls,
            outcome,
        }
    }

    /// Blinks the score out: hundreds, then tens, then units.
    pub fn display_score(&mut self, score: Score, bindings: &PinBinding<D::Pin>) {
        let digits = score.digits();
        debug!("score {}: {} blinks", score.value(), digits.total_blinks());

        self.set_mode(bindings, PinMode::Output);
        self.show_frame(bindings, LedFrame::DARK);
        for (channel, blinks) in digits.blink_plan(&self.config.digit_channels) {
            for _ in 0..blinks {
                self.show_frame(bindings, LedFrame::single(channel));
                self.delay.delay_ms(self.config.blink_on_ms);
                self.show_frame(bindings, LedFrame::DARK);
                self.delay.delay_ms(self.config.blink_off_ms);
            }
        }
    }

    /// Switches the pins to inputs and returns the pressed buttons.
    pub fn read_buttons(&mut self, bindings: &PinBinding<D::Pin>) -> ButtonSet {
        self.set_mode(bindings, PinMode::InputPullUp);
        self.sample_buttons(bindings)
    }

    /// Draws a value in `[0, range)` from the entropy sampler.
    pub fn next_in_range(&mut self, range: u16) -> u16 {
        self.sampler.next_in_range(range)
    }

    /// Draws a channel from the entropy sampler without playing a round.
    pub fn next_channel(&mut self) -> Channel {
        self.sampler.next_channel()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a reference to the pin driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns a mutable reference to the pin driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Releases the owned peripherals.
    pub fn into_parts(self) -> (D, N, T) {
        (self.driver, self.sampler.into_inner(), self.delay)
    }

    fn set_mode(&mut self, bindings: &PinBinding<D::Pin>, mode: PinMode) {
        for (_, pin) in bindings.iter() {
            self.driver.configure(pin, mode);
        }
        // Output levels are unknown right after a direction change.
        self.shown = None;
    }

    fn show_frame(&mut self, bindings: &PinBinding<D::Pin>, frame: LedFrame) {
        let changed = match self.shown {
            Some(previous) => previous.changed(frame),
            None => LedFrame::ALL.bits(),
        };

        for (channel, pin) in bindings.iter() {
            if changed & channel.mask() != 0 {
                let level = self.config.polarity.level(frame.is_lit(channel));
                self.driver.write(pin, level);
            }
        }
        self.shown = Some(frame);
    }

    fn sample_buttons(&mut self, bindings: &PinBinding<D::Pin>) -> ButtonSet {
        let mut buttons = ButtonSet::EMPTY;
        for (channel, pin) in bindings.iter() {
            if self.driver.read(pin) == PinState::Low {
                buttons.insert(channel);
            }
        }
        buttons
    }

    fn wait_for_release(&mut self, bindings: &PinBinding<D::Pin>) {
        while !self.sample_buttons(bindings).is_empty() {
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}
