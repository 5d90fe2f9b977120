//! Shared test infrastructure for reaction-game integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use reaction_game::{
    EntropySampler, GameConfig, LedPolarity, NoiseSource, PinBinding, PinDriver, PinMode, PinState,
    ReactionGame,
};

// ============================================================================
// Mock Clock and Delay
// ============================================================================

/// Shared time base advanced only by `MockDelay`
pub struct MockClock {
    now_ns: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now_ns: Cell::new(0) }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

/// Delay that moves the mock clock forward instead of waiting
pub struct MockDelay<'c> {
    clock: &'c MockClock,
}

impl<'c> MockDelay<'c> {
    pub fn new(clock: &'c MockClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(u64::from(ms) * 1_000_000);
    }
}

// ============================================================================
// Mock Noise
// ============================================================================

/// Noise source returning the same sample forever
///
/// 25 identical samples XOR to the sample itself, so the drawn channel is
/// `fold_channel(mix_seed(value))`.
pub struct ConstNoise(pub u16);

impl NoiseSource for ConstNoise {
    fn sample(&mut self) -> u16 {
        self.0
    }
}

/// Noise source stepping through a simple counter
pub struct CountingNoise {
    next: u16,
    step: u16,
}

impl CountingNoise {
    pub fn new(start: u16, step: u16) -> Self {
        Self { next: start, step }
    }
}

impl NoiseSource for CountingNoise {
    fn sample(&mut self) -> u16 {
        let value = self.next;
        self.next = self.next.wrapping_add(self.step);
        value
    }
}

/// Channel a `ConstNoise(value)` game will draw
pub fn target_for(value: u16) -> reaction_game::Channel {
    EntropySampler::new(ConstNoise(value)).next_channel()
}

// ============================================================================
// Mock Board
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Configure { pin: u8, mode: PinMode },
    Write { pin: u8, level: PinState, at_ms: u64 },
}

/// Button held down on `pin` during `[from_ms, until_ms)`
#[derive(Debug, Clone, Copy)]
pub struct Press {
    pub pin: u8,
    pub from_ms: u64,
    pub until_ms: u64,
}

/// Four-pin board that records every configure/write and answers reads from
/// a scripted list of button presses
pub struct MockBoard<'c> {
    clock: &'c MockClock,
    modes: [Option<PinMode>; 4],
    events: heapless::Vec<PinEvent, 1024>,
    presses: heapless::Vec<Press, 8>,
    reads: usize,
}

impl<'c> MockBoard<'c> {
    pub fn new(clock: &'c MockClock) -> Self {
        Self {
            clock,
            modes: [None; 4],
            events: heapless::Vec::new(),
            presses: heapless::Vec::new(),
            reads: 0,
        }
    }

    /// Hold the button on `pin` from `from_ms` (inclusive) to `until_ms` (exclusive)
    pub fn press(mut self, pin: u8, from_ms: u64, until_ms: u64) -> Self {
        self.presses
            .push(Press { pin, from_ms, until_ms })
            .expect("too many scripted presses");
        self
    }

    pub fn events(&self) -> &[PinEvent] {
        &self.events
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn mode(&self, pin: u8) -> Option<PinMode> {
        self.modes[pin as usize]
    }

    /// Last level written to `pin`
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.writes(pin).last().map(|(level, _)| level)
    }

    /// `(level, at_ms)` for every write to `pin`
    pub fn writes(&self, pin: u8) -> impl Iterator<Item = (PinState, u64)> + '_ {
        self.events.iter().filter_map(move |event| match *event {
            PinEvent::Write { pin: p, level, at_ms } if p == pin => Some((level, at_ms)),
            _ => None,
        })
    }

    /// Number of off-to-lit transitions on `pin` for an active-low LED
    pub fn blinks(&self, pin: u8) -> usize {
        self.lit_edges(pin, LedPolarity::ActiveLow)
    }

    pub fn lit_edges(&self, pin: u8, polarity: LedPolarity) -> usize {
        let lit = polarity.level(true);
        let mut previous = None;
        let mut edges = 0;
        for (level, _) in self.writes(pin) {
            if level == lit && previous != Some(lit) {
                edges += 1;
            }
            previous = Some(level);
        }
        edges
    }

    /// Number of configure calls putting any pin into `mode`
    pub fn configures(&self, mode: PinMode) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PinEvent::Configure { mode: m, .. } if *m == mode))
            .count()
    }

    fn pressed(&self, pin: u8) -> bool {
        let now = self.clock.now_ms();
        self.presses
            .iter()
            .any(|press| press.pin == pin && press.from_ms <= now && now < press.until_ms)
    }

    fn record(&mut self, event: PinEvent) {
        self.events.push(event).expect("event log full");
    }
}

impl PinDriver for MockBoard<'_> {
    type Pin = u8;

    fn configure(&mut self, pin: u8, mode: PinMode) {
        self.modes[pin as usize] = Some(mode);
        self.record(PinEvent::Configure { pin, mode });
    }

    fn write(&mut self, pin: u8, level: PinState) {
        assert_eq!(self.mode(pin), Some(PinMode::Output), "write to input pin {}", pin);
        let at_ms = self.clock.now_ms();
        self.record(PinEvent::Write { pin, level, at_ms });
    }

    fn read(&mut self, pin: u8) -> PinState {
        assert_eq!(self.mode(pin), Some(PinMode::InputPullUp), "read of output pin {}", pin);
        self.reads += 1;
        if self.pressed(pin) {
            PinState::Low
        } else {
            PinState::High
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Channel `i` on pin `i`
pub const PINS: PinBinding<u8> = PinBinding::new([0, 1, 2, 3]);

pub type TestGame<'c, N> = ReactionGame<MockBoard<'c>, N, MockDelay<'c>>;

pub fn game<'c, N: NoiseSource>(
    clock: &'c MockClock,
    board: MockBoard<'c>,
    noise: N,
    config: GameConfig,
) -> TestGame<'c, N> {
    ReactionGame::new(board, noise, MockDelay::new(clock), config)
}

/// True when every pin's last written level is the unlit level
pub fn all_dark(board: &MockBoard<'_>, polarity: LedPolarity) -> bool {
    (0..4).all(|pin| board.level(pin) == Some(polarity.level(false)))
}
