//! Pin assignments, debounce threshold and press policy.
//!
//! The constants describe the reference board (button on PB3, LED channels
//! on PB5/PB6/PB7). [`ControllerConfig`] bundles them with validation so a
//! different board can be described without touching the controller.

use crate::hardware::{PinId, PinMask};

/// Interrupt hits required before the debounce path counts a press.
pub const DEBOUNCE_THRESHOLD: u32 = 10;

/// Button input pin.
pub const BUTTON_PIN: PinId = 3;

/// Red LED channel pin.
pub const RED_LED_PIN: PinId = 5;

/// Green LED channel pin.
pub const GREEN_LED_PIN: PinId = 6;

/// Blue LED channel pin.
pub const BLUE_LED_PIN: PinId = 7;

/// Highest pin number of a GPIO port.
pub const MAX_PIN: PinId = 15;

/// Which evidence sources are allowed to advance the color.
///
/// A single physical press usually produces both an interrupt hit and a
/// polled falling edge. With [`PressPolicy::Both`] each source advances the
/// color on its own, so one press can move it twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressPolicy {
    /// Debounce threshold and polled edge both advance.
    #[default]
    Both,
    /// Only the debounce threshold advances.
    InterruptOnly,
    /// Only the polled edge advances. The debounce counter is still drained.
    EdgeOnly,
}

impl PressPolicy {
    /// Returns `true` if reaching the debounce threshold advances the color.
    #[inline]
    pub fn uses_interrupt(self) -> bool {
        matches!(self, PressPolicy::Both | PressPolicy::InterruptOnly)
    }

    /// Returns `true` if a polled falling edge advances the color.
    #[inline]
    pub fn uses_edge(self) -> bool {
        matches!(self, PressPolicy::Both | PressPolicy::EdgeOnly)
    }
}

/// Pins of the three LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPins {
    pub red: PinId,
    pub green: PinId,
    pub blue: PinId,
}

impl LedPins {
    /// Creates an LED pin assignment.
    ///
    /// Not validated. Pins of 32 and above drop out of the mask, use
    /// `ControllerConfig::new` to reject anything outside 0-15.
    pub const fn new(red: PinId, green: PinId, blue: PinId) -> Self {
        Self { red, green, blue }
    }

    /// All three channels as one mask.
    pub const fn mask(&self) -> PinMask {
        PinMask::pin(self.red).with(self.green).with(self.blue)
    }
}

impl Default for LedPins {
    fn default() -> Self {
        Self::new(RED_LED_PIN, GREEN_LED_PIN, BLUE_LED_PIN)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A debounce threshold of zero would advance on every loop iteration.
    ZeroThreshold,

    /// Pin number does not exist on a GPIO port.
    PinOutOfRange(PinId),

    /// The same pin is assigned to more than one function.
    PinConflict(PinId),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroThreshold => {
                write!(f, "debounce threshold must be at least 1")
            }
            ConfigError::PinOutOfRange(pin) => {
                write!(f, "pin {} is out of range (0-{})", pin, MAX_PIN)
            }
            ConfigError::PinConflict(pin) => {
                write!(f, "pin {} is assigned more than once", pin)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Complete controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    button: PinId,
    leds: LedPins,
    debounce_threshold: u32,
    policy: PressPolicy,
}

impl ControllerConfig {
    /// Validates and creates a configuration.
    ///
    /// # Errors
    /// * [`ConfigError::ZeroThreshold`] - `debounce_threshold` is zero
    /// * [`ConfigError::PinOutOfRange`] - a pin is above [`MAX_PIN`]
    /// * [`ConfigError::PinConflict`] - two functions share a pin
    pub fn new(
        button: PinId,
        leds: LedPins,
        debounce_threshold: u32,
        policy: PressPolicy,
    ) -> Result<Self, ConfigError> {
        if debounce_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        let pins = [button, leds.red, leds.green, leds.blue];
        let mut seen = PinMask::EMPTY;
        for pin in pins {
            if pin > MAX_PIN {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            if seen.contains(pin) {
                return Err(ConfigError::PinConflict(pin));
            }
            seen = seen.with(pin);
        }

        Ok(Self {
            button,
            leds,
            debounce_threshold,
            policy,
        })
    }

    /// Same configuration with a different debounce threshold.
    pub fn with_threshold(self, debounce_threshold: u32) -> Result<Self, ConfigError> {
        Self::new(self.button, self.leds, debounce_threshold, self.policy)
    }

    /// Same configuration with a different press policy.
    pub fn with_policy(self, policy: PressPolicy) -> Self {
        Self { policy, ..self }
    }

    #[inline]
    pub fn button(&self) -> PinId {
        self.button
    }

    #[inline]
    pub fn leds(&self) -> &LedPins {
        &self.leds
    }

    #[inline]
    pub fn debounce_threshold(&self) -> u32 {
        self.debounce_threshold
    }

    #[inline]
    pub fn policy(&self) -> PressPolicy {
        self.policy
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            button: BUTTON_PIN,
            leds: LedPins::default(),
            debounce_threshold: DEBOUNCE_THRESHOLD,
            policy: PressPolicy::Both,
        }
    }
}
