#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::pac::interrupt;

use rgb_button_cycler::{Controller, ControllerConfig, DebounceFilter, on_button_interrupt};
use stm32f4_demos::exti_line::ExtiLine;

mod hardware_setup;

/// Press evidence shared between EXTI3 and the main loop
static FILTER: DebounceFilter = DebounceFilter::new();

/// Button interrupt (PB3, falling edge)
#[interrupt]
fn EXTI3() {
    let mut line = ExtiLine;
    on_button_interrupt(&mut line, &FILTER);
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RGB Button Cycler ===");

    let hw = hardware_setup::init_hardware();

    let config = ControllerConfig::default();
    let mut controller = Controller::new(hw.port, &FILTER, config);
    controller.setup();

    rprintln!(
        "Button on PB3, LEDs on PB5/PB6/PB7, debounce threshold {}",
        config.debounce_threshold()
    );
    rprintln!("Press the button to cycle: red, green, blue, yellow, magenta, cyan, white, off");

    // Never returns
    controller.run()
}
