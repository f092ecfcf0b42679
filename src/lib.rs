#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebounceFilter`**: Atomic press-evidence counter shared by the interrupt handler and the main loop
//! - **`EdgeDetector`**: Detects a falling edge between two polled button samples
//! - **`ColorState`**: Position in the eight-state color cycle, rendered to an `OutputPattern`
//! - **`on_button_interrupt`**: Interrupt handler body (acknowledge, then record evidence)
//! - **`Controller`**: Main loop driving the LED from both evidence sources
//! - **`ButtonPort`** / **`InterruptLine`**: Traits to implement for your hardware
//! - **`ControllerConfig`**: Pins, debounce threshold and `PressPolicy`
//!
//! Patterns convert to `Srgb<f32>` for code that already speaks colors.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod hardware;
pub mod debounce;
pub mod edge;
pub mod color;
pub mod interrupt;
pub mod config;
pub mod controller;

pub use color::{Color, ColorState, OutputPattern};
pub use config::{ConfigError, ControllerConfig, LedPins, PressPolicy};
pub use controller::{Controller, StepReport};
pub use debounce::DebounceFilter;
pub use edge::EdgeDetector;
pub use hardware::{ButtonPort, Edge, InterruptLine, Level, PinId, PinMask};
pub use interrupt::on_button_interrupt;

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
