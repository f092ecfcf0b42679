//! Body of the button's external interrupt handler.

use crate::debounce::DebounceFilter;
use crate::hardware::InterruptLine;

/// Handles one firing of the button interrupt.
///
/// If the line's pending flag is set, clears it and then records one piece of
/// press evidence. Returns `true` if the interrupt was for this line.
///
/// Call this from the platform's interrupt vector. It does no logging and
/// never loops or blocks.
#[inline]
pub fn on_button_interrupt<L: InterruptLine>(line: &mut L, filter: &DebounceFilter) -> bool {
    if !line.is_pending() {
        return false;
    }

    line.acknowledge_interrupt();
    filter.record_evidence();
    true
}
