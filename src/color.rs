//! The eight-state color cycle and its pin patterns.

use crate::config::LedPins;
use crate::hardware::PinMask;
use palette::Srgb;

/// Named meaning of each color state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Off,
}

/// Which of the three LED channels are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl OutputPattern {
    /// All channels off.
    pub const OFF: Self = Self::new(false, false, false);

    /// Creates a pattern from per-channel drive flags.
    #[inline]
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Output register value for this pattern on the given LED pins.
    pub fn to_mask(self, pins: &LedPins) -> PinMask {
        let mut mask = PinMask::EMPTY;
        if self.red {
            mask = mask.with(pins.red);
        }
        if self.green {
            mask = mask.with(pins.green);
        }
        if self.blue {
            mask = mask.with(pins.blue);
        }
        mask
    }

    /// Full-intensity color shown by this pattern.
    pub fn to_srgb(self) -> Srgb {
        let channel = |on: bool| if on { 1.0 } else { 0.0 };
        Srgb::new(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// Nearest on/off pattern for `color`. A channel at 0.5 or above is driven.
    pub fn from_srgb(color: Srgb) -> Self {
        Self::new(color.red >= 0.5, color.green >= 0.5, color.blue >= 0.5)
    }

    /// Returns `true` if no channel is driven.
    #[inline]
    pub fn is_off(self) -> bool {
        self == Self::OFF
    }
}

/// Current position in the color cycle, 1 through 8.
///
/// The inner value may be out of range if it was constructed with
/// [`ColorState::from_raw`]; [`ColorState::render`] and
/// [`ColorState::advance`] restore it to [`ColorState::OFF`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorState(u8);

impl ColorState {
    /// First state of the cycle (red).
    pub const FIRST: Self = ColorState(1);

    /// Last state of the cycle, all channels off. Also the power-on state.
    pub const OFF: Self = ColorState(8);

    /// Number of states in the cycle.
    pub const COUNT: u8 = 8;

    /// Checked constructor, `None` outside 1..=8.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::COUNT {
            Some(ColorState(value))
        } else {
            None
        }
    }

    /// Stores `value` as-is, even if it is out of range.
    pub const fn from_raw(value: u8) -> Self {
        ColorState(value)
    }

    /// Raw state number.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if the state is within 1..=8.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 <= Self::COUNT
    }

    /// Moves to the next state, wrapping from 8 back to 1.
    pub fn advance(&mut self) {
        self.restore();
        self.0 = if self.0 >= Self::COUNT { 1 } else { self.0 + 1 };
    }

    /// Returns the pin pattern for the current state.
    ///
    /// An out-of-range state is reset to [`ColorState::OFF`] before rendering.
    pub fn render(&mut self) -> OutputPattern {
        self.restore();
        match self.color() {
            Color::Red => OutputPattern::new(true, false, false),
            Color::Green => OutputPattern::new(false, true, false),
            Color::Blue => OutputPattern::new(false, false, true),
            Color::Yellow => OutputPattern::new(true, true, false),
            Color::Magenta => OutputPattern::new(true, false, true),
            Color::Cyan => OutputPattern::new(false, true, true),
            Color::White => OutputPattern::new(true, true, true),
            Color::Off => OutputPattern::OFF,
        }
    }

    /// Named color of the state. Out-of-range states read as [`Color::Off`].
    pub fn color(self) -> Color {
        match self.0 {
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Blue,
            4 => Color::Yellow,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            _ => Color::Off,
        }
    }

    fn restore(&mut self) {
        if !self.is_valid() {
            *self = Self::OFF;
        }
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::OFF
    }
}
