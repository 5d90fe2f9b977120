//! Hardware abstraction traits for the pins and the noise source.
//!
//! Delays are not abstracted here; the game uses
//! [`embedded_hal::delay::DelayNs`] so any HAL delay (or an async-friendly
//! wrapper that yields to a scheduler) can be plugged in directly.

pub use embedded_hal::digital::PinState;

/// Direction and pull configuration for a channel pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output driving the LED.
    Output,

    /// Input with pull-up; a pressed button pulls the pin low.
    InputPullUp,
}

/// Electrical level that lights an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPolarity {
    /// Driving the pin low lights the LED (LED between supply and pin).
    #[default]
    ActiveLow,

    /// Driving the pin high lights the LED.
    ActiveHigh,
}

impl LedPolarity {
    /// Level to write for the given logical LED state.
    #[inline]
    pub const fn level(self, lit: bool) -> PinState {
        match (self, lit) {
            (LedPolarity::ActiveLow, true) | (LedPolarity::ActiveHigh, false) => PinState::Low,
            (LedPolarity::ActiveLow, false) | (LedPolarity::ActiveHigh, true) => PinState::High,
        }
    }
}

/// Trait for abstracting the GPIO block that owns the four channel pins.
///
/// Each channel shares one pin between its LED and its button, so the game
/// flips pins between [`PinMode::Output`] and [`PinMode::InputPullUp`] as it
/// moves between showing and listening.
///
/// Handle any hardware errors internally - these methods cannot fail.
pub trait PinDriver {
    /// Identifier for one physical pin, e.g. a `(port, pin)` pair.
    type Pin: Copy;

    /// Reconfigures direction and pull of `pin`.
    fn configure(&mut self, pin: Self::Pin, mode: PinMode);

    /// Drives `pin` to `level`. Only meaningful in [`PinMode::Output`].
    fn write(&mut self, pin: Self::Pin, level: PinState);

    /// Samples the current level of `pin`.
    fn read(&mut self, pin: Self::Pin) -> PinState;
}

/// Trait for an analog noise source, typically a floating ADC channel.
pub trait NoiseSource {
    /// Triggers one conversion and returns the raw sample.
    fn sample(&mut self) -> u16;
}

impl<T: PinDriver + ?Sized> PinDriver for &mut T {
    type Pin = T::Pin;

    fn configure(&mut self, pin: Self::Pin, mode: PinMode) {
        (**self).configure(pin, mode)
    }

    fn write(&mut self, pin: Self::Pin, level: PinState) {
        (**self).write(pin, level)
    }

    fn read(&mut self, pin: Self::Pin) -> PinState {
        (**self).read(pin)
    }
}

impl<T: NoiseSource + ?Sized> NoiseSource for &mut T {
    fn sample(&mut self) -> u16 {
        (**self).sample()
    }
}
