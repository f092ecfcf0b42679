//! Main-loop controller tying the filter, edge detector and color cycle to the
//! hardware.
//!
//! Provides [`Controller`], which owns the [`ButtonPort`] and the color state
//! and borrows the [`DebounceFilter`] shared with the interrupt handler.

use crate::color::{ColorState, OutputPattern};
use crate::config::ControllerConfig;
use crate::debounce::DebounceFilter;
use crate::edge::EdgeDetector;
use crate::hardware::{ButtonPort, Edge, Level};

/// What happened during one [`Controller::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// The debounce threshold was reached and advanced the color.
    pub debounced: bool,
    /// A polled falling edge advanced the color.
    pub edge: bool,
    /// Button sample read this iteration.
    pub sample: Level,
    /// Color state after the step.
    pub state: ColorState,
    /// Pattern written to the LED pins.
    pub pattern: OutputPattern,
}

impl StepReport {
    /// Number of times the color advanced during the step (0-2).
    #[inline]
    pub fn advances(&self) -> u8 {
        self.debounced as u8 + self.edge as u8
    }
}

/// Drives one RGB LED from one button.
///
/// # Type Parameters
/// * `'f` - Lifetime of the shared debounce filter, `'static` on hardware
/// * `P` - Button/LED port implementation
pub struct Controller<'f, P: ButtonPort> {
    port: P,
    filter: &'f DebounceFilter,
    edge: EdgeDetector,
    state: ColorState,
    config: ControllerConfig,
}

impl<'f, P: ButtonPort> Controller<'f, P> {
    /// Creates a controller with the LED off and the button assumed released.
    ///
    /// Does not touch the hardware. Call [`Controller::setup`] once before the
    /// first [`Controller::step`].
    pub fn new(port: P, filter: &'f DebounceFilter, config: ControllerConfig) -> Self {
        Self {
            port,
            filter,
            edge: EdgeDetector::new(),
            state: ColorState::OFF,
            config,
        }
    }

    /// Configures the pins, arms the falling-edge interrupt and writes the
    /// initial pattern.
    pub fn setup(&mut self) {
        let button = self.config.button();
        let leds = self.config.leds().mask();

        self.port.configure_input_pin(button);
        self.port.configure_output_pins(leds);
        self.port.enable_edge_interrupt(button, Edge::Falling);

        let pattern = self.state.render();
        self.port.write_output_pins(pattern.to_mask(self.config.leds()));

        #[cfg(feature = "defmt")]
        defmt::info!(
            "controller ready: button={} leds={} threshold={} policy={}",
            button,
            leds,
            self.config.debounce_threshold(),
            self.config.policy()
        );
    }

    /// Runs one loop iteration.
    ///
    /// Order: debounce threshold check, button sample, edge check, render and
    /// write. Each source that fires (and is allowed by the press policy)
    /// advances the color once.
    pub fn step(&mut self) -> StepReport {
        let policy = self.config.policy();

        let threshold_reached = self
            .filter
            .consume_if_threshold_reached(self.config.debounce_threshold());
        let debounced = threshold_reached && policy.uses_interrupt();
        if debounced {
            self.advance("debounce");
        }

        let sample = self.port.read_input_pin();
        let edge = self.edge.poll_edge(sample) && policy.uses_edge();
        if edge {
            self.advance("edge");
        }

        let pattern = self.state.render();
        self.port.write_output_pins(pattern.to_mask(self.config.leds()));

        StepReport {
            debounced,
            edge,
            sample,
            state: self.state,
            pattern,
        }
    }

    /// Runs the loop forever. Busy-polls without sleeping.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    fn advance(&mut self, source: &'static str) {
        self.state.advance();

        #[cfg(feature = "defmt")]
        defmt::debug!("{} press -> color {}", source, self.state.color());
    }

    /// Current color state.
    #[inline]
    pub fn color_state(&self) -> ColorState {
        self.state
    }

    /// Overwrites the color state, e.g. to restore a value kept elsewhere.
    ///
    /// Out-of-range values are accepted and corrected on the next render.
    pub fn set_color_state(&mut self, state: ColorState) {
        self.state = state;
    }

    /// Last button sample seen by the edge detector.
    #[inline]
    pub fn last_sample(&self) -> Level {
        self.edge.last_sample()
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    #[inline]
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
