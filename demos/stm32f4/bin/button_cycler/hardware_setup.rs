use rtt_target::rprintln;
use stm32f4xx_hal::{pac, prelude::*};

use rgb_button_cycler::config::{BLUE_LED_PIN, GREEN_LED_PIN, RED_LED_PIN};
use stm32f4_demos::gpio_port::GpioPort;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub port: GpioPort,
}

/// Take the device peripherals and build the button/LED port
///
/// Runs on the reset clock (16 MHz HSI), the busy-poll loop does not need
/// more. The EXTI line is routed and armed later by `Controller::setup`,
/// through the port.
pub fn init_hardware() -> HardwareContext {
    let dp = pac::Peripherals::take().unwrap();

    let gpiob = dp.GPIOB.split();
    let syscfg = dp.SYSCFG.constrain();

    // Button: PB3, floating input (external pull-up on the board)
    let button = gpiob.pb3.into_floating_input();

    // LEDs: PB5 (red), PB6 (green), PB7 (blue), push-pull outputs
    let leds = [
        (RED_LED_PIN, gpiob.pb5.into_push_pull_output().erase()),
        (GREEN_LED_PIN, gpiob.pb6.into_push_pull_output().erase()),
        (BLUE_LED_PIN, gpiob.pb7.into_push_pull_output().erase()),
    ];
    rprintln!("GPIOB pins configured");

    HardwareContext {
        port: GpioPort::new(button, leds, dp.EXTI, syscfg),
    }
}
