//! Hardware abstraction traits for the button input and LED outputs.
//!
//! The controller never touches registers. Implement [`ButtonPort`] for the
//! GPIO port the main loop drives, and [`InterruptLine`] for the external
//! interrupt line the button is wired to.

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low. The button reads low while pressed.
    Low,
    /// Logic high. The button reads high while released.
    High,
}

impl Level {
    /// Returns `true` for [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Returns `true` for [`Level::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Signal edge an interrupt is armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// High to low transition.
    Falling,
    /// Low to high transition.
    Rising,
}

/// Pin number within a single GPIO port (0-15).
pub type PinId = u8;

/// Bit for `pin`, zero when the pin number does not fit in the mask.
#[inline]
const fn pin_bit(pin: PinId) -> u32 {
    match 1u32.checked_shl(pin as u32) {
        Some(bit) => bit,
        None => 0,
    }
}

/// Set of pins within a single GPIO port, one bit per pin number.
///
/// Pin numbers of 32 and above have no bit: adding them is a no-op and
/// `contains` reports them as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMask(pub u32);

impl PinMask {
    /// No pins.
    pub const EMPTY: Self = PinMask(0);

    /// Mask containing a single pin.
    #[inline]
    pub const fn pin(pin: PinId) -> Self {
        PinMask(pin_bit(pin))
    }

    /// Returns this mask with `pin` added.
    #[inline]
    pub const fn with(self, pin: PinId) -> Self {
        PinMask(self.0 | pin_bit(pin))
    }

    /// Returns `true` if `pin` is part of the mask.
    #[inline]
    pub const fn contains(self, pin: PinId) -> bool {
        self.0 & pin_bit(pin) != 0
    }

    /// Raw register value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// Main-loop side of the hardware: the button input and the LED outputs.
///
/// All methods are infallible. Implementations handle any HAL error
/// internally, the controller has nowhere to propagate it.
pub trait ButtonPort {
    /// One-time setup of the button pin as a plain input (no pull resistor).
    fn configure_input_pin(&mut self, pin: PinId);

    /// One-time setup of the LED pins as push-pull outputs.
    fn configure_output_pins(&mut self, pins: PinMask);

    /// Arms the external interrupt for `pin` on `edge` and unmasks it in the
    /// interrupt controller.
    fn enable_edge_interrupt(&mut self, pin: PinId, edge: Edge);

    /// Samples the button pin.
    fn read_input_pin(&mut self) -> Level;

    /// Drives the output pins to `mask` in a single write.
    ///
    /// The write replaces the previous output value, it does not merge with it.
    fn write_output_pins(&mut self, mask: PinMask);
}

/// Interrupt side of the hardware: the latched pending flag of the button's
/// external interrupt line.
pub trait InterruptLine {
    /// Returns `true` while the line's pending flag is set.
    fn is_pending(&self) -> bool;

    /// Clears the pending flag.
    ///
    /// Must be called before the handler returns, otherwise the latched
    /// interrupt fires again immediately.
    fn acknowledge_interrupt(&mut self);
}
