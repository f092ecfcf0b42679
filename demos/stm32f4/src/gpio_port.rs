use rgb_button_cycler::config::BUTTON_PIN;
use rgb_button_cycler::{ButtonPort, Edge, Level, PinId, PinMask};
use stm32f4xx_hal::gpio::{self, ErasedPin, ExtiPin, Output, Pull, PushPull};
use stm32f4xx_hal::pac::{self, NVIC};
use stm32f4xx_hal::syscfg::SysCfg;

use crate::exti_line::{self, ButtonPin};

/// LED pin after erasing its number, kept next to that number
pub type LedPin = ErasedPin<Output<PushPull>>;

/// `ButtonPort` on GPIOB built from HAL pins
///
/// Pin modes are fixed by the pin types handed to `new`. The trait methods
/// set the remaining state (pull, initial output level, EXTI routing) through
/// the HAL. Arming the interrupt moves the button pin into the slot shared
/// with the EXTI handler.
pub struct GpioPort {
    button: Option<ButtonPin>,
    leds: [(PinId, LedPin); 3],
    exti: pac::EXTI,
    syscfg: SysCfg,
}

impl GpioPort {
    pub fn new(
        button: ButtonPin,
        leds: [(PinId, LedPin); 3],
        exti: pac::EXTI,
        syscfg: SysCfg,
    ) -> Self {
        Self {
            button: Some(button),
            leds,
            exti,
            syscfg,
        }
    }
}

impl ButtonPort for GpioPort {
    fn configure_input_pin(&mut self, pin: PinId) {
        debug_assert_eq!(pin, BUTTON_PIN, "the button is wired to PB3");

        if let Some(button) = self.button.as_mut() {
            button.set_internal_resistor(Pull::None);
        }
    }

    fn configure_output_pins(&mut self, pins: PinMask) {
        for (id, led) in self.leds.iter_mut() {
            if pins.contains(*id) {
                led.set_low();
            }
        }
    }

    fn enable_edge_interrupt(&mut self, _pin: PinId, edge: Edge) {
        let Some(mut button) = self.button.take() else {
            return;
        };

        let trigger = match edge {
            Edge::Falling => gpio::Edge::Falling,
            Edge::Rising => gpio::Edge::Rising,
        };

        button.make_interrupt_source(&mut self.syscfg);
        button.trigger_on_edge(&mut self.exti, trigger);
        button.enable_interrupt(&mut self.exti);
        let irq = button.interrupt();

        exti_line::share_button(button);

        // SAFETY: the handler only touches the filter and the shared pin
        unsafe { NVIC::unmask(irq) };
    }

    fn read_input_pin(&mut self) -> Level {
        let high = match self.button.as_ref() {
            Some(button) => button.is_high(),
            None => exti_line::read_shared_button().unwrap_or(true),
        };

        Level::from(high)
    }

    fn write_output_pins(&mut self, mask: PinMask) {
        // All three channels switch in one BSRR write: set bits for the LEDs
        // in `mask`, reset bits for the others. The HAL only offers per-pin
        // writes, which would show intermediate colours.
        let mut bsrr = 0u32;
        for (id, _) in self.leds.iter() {
            bsrr |= if mask.contains(*id) {
                1 << id
            } else {
                1 << (id + 16)
            };
        }

        // SAFETY: BSRR is write-only and atomic, bits outside the LED pins
        // are zero and leave the other GPIOB pins untouched
        unsafe { (*pac::GPIOB::ptr()).bsrr.write(|w| w.bits(bsrr)) };
    }
}
