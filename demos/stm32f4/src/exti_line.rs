use core::cell::RefCell;
use critical_section::Mutex;
use rgb_button_cycler::InterruptLine;
use stm32f4xx_hal::gpio::{ExtiPin, Input, PB3};

/// Button pin type once it is configured as a floating input
pub type ButtonPin = PB3<Input>;

/// Button pin shared between the EXTI handler and the main loop
///
/// Empty until `GpioPort` arms the interrupt and hands the pin over.
static BUTTON: Mutex<RefCell<Option<ButtonPin>>> = Mutex::new(RefCell::new(None));

/// Move the configured button pin into the shared slot
pub fn share_button(button: ButtonPin) {
    critical_section::with(|cs| {
        BUTTON.borrow_ref_mut(cs).replace(button);
    });
}

/// Sample the shared button pin, `None` before it was shared
pub fn read_shared_button() -> Option<bool> {
    critical_section::with(|cs| BUTTON.borrow_ref(cs).as_ref().map(|button| button.is_high()))
}

/// Pending flag of the button's EXTI line
///
/// Zero-sized handle the interrupt handler builds on the stack, the pin
/// itself stays in the shared slot.
pub struct ExtiLine;

impl InterruptLine for ExtiLine {
    fn is_pending(&self) -> bool {
        critical_section::with(|cs| {
            BUTTON
                .borrow_ref(cs)
                .as_ref()
                .is_some_and(|button| button.check_interrupt())
        })
    }

    fn acknowledge_interrupt(&mut self) {
        critical_section::with(|cs| {
            if let Some(button) = BUTTON.borrow_ref_mut(cs).as_mut() {
                button.clear_interrupt_pending_bit();
            }
        });
    }
}
