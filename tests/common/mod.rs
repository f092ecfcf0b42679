//! Shared test infrastructure for rgb-button-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_button_cycler::{ButtonPort, Edge, InterruptLine, Level, PinId, PinMask};

// ============================================================================
// Mock Port
// ============================================================================

/// One recorded call on the mock port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCall {
    ConfigureInput(PinId),
    ConfigureOutputs(PinMask),
    EnableInterrupt(PinId, Edge),
    Read,
    Write(PinMask),
}

/// Mock button/LED port with a scripted input level and a call log
pub struct MockPort {
    input: Level,
    output: PinMask,
    calls: heapless::Vec<PortCall, 64>,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            input: Level::High,
            output: PinMask::EMPTY,
            calls: heapless::Vec::new(),
        }
    }

    /// Set the level the next reads will return
    pub fn set_input(&mut self, level: Level) {
        self.input = level;
    }

    pub fn press(&mut self) {
        self.set_input(Level::Low);
    }

    pub fn release(&mut self) {
        self.set_input(Level::High);
    }

    pub fn output(&self) -> PinMask {
        self.output
    }

    pub fn calls(&self) -> &[PortCall] {
        &self.calls
    }

    pub fn writes(&self) -> impl Iterator<Item = PinMask> + '_ {
        self.calls.iter().filter_map(|call| match call {
            PortCall::Write(mask) => Some(*mask),
            _ => None,
        })
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: PortCall) {
        // Long-running tests only care about the newest calls
        if self.calls.is_full() {
            self.calls.clear();
        }
        let _ = self.calls.push(call);
    }
}

impl ButtonPort for MockPort {
    fn configure_input_pin(&mut self, pin: PinId) {
        self.record(PortCall::ConfigureInput(pin));
    }

    fn configure_output_pins(&mut self, pins: PinMask) {
        self.record(PortCall::ConfigureOutputs(pins));
    }

    fn enable_edge_interrupt(&mut self, pin: PinId, edge: Edge) {
        self.record(PortCall::EnableInterrupt(pin, edge));
    }

    fn read_input_pin(&mut self) -> Level {
        self.record(PortCall::Read);
        self.input
    }

    fn write_output_pins(&mut self, mask: PinMask) {
        self.output = mask;
        self.record(PortCall::Write(mask));
    }
}

// ============================================================================
// Mock Interrupt Line
// ============================================================================

/// Mock latched interrupt line
pub struct MockLine {
    pending: bool,
    acknowledged: u32,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            pending: false,
            acknowledged: 0,
        }
    }

    /// Latch the pending flag, as the edge detection circuitry would
    pub fn trigger(&mut self) {
        self.pending = true;
    }

    pub fn acknowledged(&self) -> u32 {
        self.acknowledged
    }
}

impl InterruptLine for MockLine {
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn acknowledge_interrupt(&mut self) {
        self.pending = false;
        self.acknowledged += 1;
    }
}

// ============================================================================
// Pin masks of the default board
// ============================================================================

pub const RED: PinMask = PinMask(1 << 5);
pub const GREEN: PinMask = PinMask(1 << 6);
pub const BLUE: PinMask = PinMask(1 << 7);
pub const OFF: PinMask = PinMask::EMPTY;

pub fn mix(masks: &[PinMask]) -> PinMask {
    PinMask(masks.iter().fold(0, |acc, m| acc | m.bits()))
}
