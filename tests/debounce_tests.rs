//! Integration tests for the debounce filter, edge detector and interrupt body

mod common;
use common::*;

use rgb_button_cycler::config::DEBOUNCE_THRESHOLD;
use rgb_button_cycler::{DebounceFilter, EdgeDetector, InterruptLine, Level, on_button_interrupt};

#[test]
fn below_threshold_is_not_consumed() {
    let filter = DebounceFilter::new();

    for count in 0..DEBOUNCE_THRESHOLD {
        assert_eq!(filter.pending(), count);
        assert!(!filter.consume_if_threshold_reached(DEBOUNCE_THRESHOLD));
        assert_eq!(filter.pending(), count);
        filter.record_evidence();
    }
}

#[test]
fn threshold_consumes_and_resets() {
    let filter = DebounceFilter::new();
    for _ in 0..DEBOUNCE_THRESHOLD {
        filter.record_evidence();
    }

    assert!(filter.consume_if_threshold_reached(DEBOUNCE_THRESHOLD));
    assert_eq!(filter.pending(), 0);
    assert!(!filter.consume_if_threshold_reached(DEBOUNCE_THRESHOLD));
}

#[test]
fn above_threshold_resets_to_zero() {
    let filter = DebounceFilter::new();
    for _ in 0..DEBOUNCE_THRESHOLD + 7 {
        filter.record_evidence();
    }

    assert!(filter.consume_if_threshold_reached(DEBOUNCE_THRESHOLD));
    assert_eq!(filter.pending(), 0);
}

#[test]
fn concurrent_increments_all_land() {
    static FILTER: DebounceFilter = DebounceFilter::new();

    let writers: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                for _ in 0..1_000 {
                    FILTER.record_evidence();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(FILTER.pending(), 4_000);
}

#[test]
fn consuming_while_recording_never_overcounts() {
    static FILTER: DebounceFilter = DebounceFilter::new();
    const HITS: u32 = 10_000;

    let writer = std::thread::spawn(|| {
        for _ in 0..HITS {
            FILTER.record_evidence();
        }
    });

    let mut consumed = 0;
    while !writer.is_finished() {
        if FILTER.consume_if_threshold_reached(DEBOUNCE_THRESHOLD) {
            consumed += 1;
        }
    }
    writer.join().unwrap();

    while FILTER.consume_if_threshold_reached(DEBOUNCE_THRESHOLD) {
        consumed += 1;
    }

    // Each consume clears at least one full threshold worth of hits
    assert!(consumed * DEBOUNCE_THRESHOLD + FILTER.pending() <= HITS);
    assert!(FILTER.pending() < DEBOUNCE_THRESHOLD);
}

#[test]
fn edge_fires_only_on_high_to_low() {
    let cases = [
        (Level::High, Level::Low, true),
        (Level::High, Level::High, false),
        (Level::Low, Level::Low, false),
        (Level::Low, Level::High, false),
    ];

    for (previous, current, expected) in cases {
        let mut detector = EdgeDetector::with_initial(previous);
        assert_eq!(detector.poll_edge(current), expected);
        assert_eq!(detector.last_sample(), current);
    }
}

#[test]
fn edge_fires_once_per_press() {
    let mut detector = EdgeDetector::new();
    assert_eq!(detector.last_sample(), Level::High);

    let samples = [
        Level::High,
        Level::Low,
        Level::Low,
        Level::Low,
        Level::High,
        Level::Low,
    ];
    let edges: Vec<bool> = samples.iter().map(|s| detector.poll_edge(*s)).collect();
    assert_eq!(edges, [false, true, false, false, false, true]);
}

#[test]
fn interrupt_acknowledges_then_records() {
    let filter = DebounceFilter::new();
    let mut line = MockLine::new();

    line.trigger();
    assert!(on_button_interrupt(&mut line, &filter));
    assert!(!line.is_pending());
    assert_eq!(line.acknowledged(), 1);
    assert_eq!(filter.pending(), 1);
}

/// Line that snapshots the filter when it is acknowledged
struct OrderedLine<'a> {
    filter: &'a DebounceFilter,
    pending: bool,
    evidence_at_ack: Option<u32>,
}

impl InterruptLine for OrderedLine<'_> {
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn acknowledge_interrupt(&mut self) {
        self.pending = false;
        self.evidence_at_ack = Some(self.filter.pending());
    }
}

#[test]
fn acknowledge_happens_before_evidence() {
    let filter = DebounceFilter::new();
    let mut line = OrderedLine {
        filter: &filter,
        pending: true,
        evidence_at_ack: None,
    };

    on_button_interrupt(&mut line, &filter);
    assert_eq!(line.evidence_at_ack, Some(0));
    assert_eq!(filter.pending(), 1);
}

#[test]
fn each_latched_interrupt_counts_once() {
    let filter = DebounceFilter::new();
    let mut line = MockLine::new();

    for _ in 0..DEBOUNCE_THRESHOLD {
        line.trigger();
        on_button_interrupt(&mut line, &filter);
        // A second dispatch without a new edge finds the flag cleared
        on_button_interrupt(&mut line, &filter);
    }

    assert_eq!(line.acknowledged(), DEBOUNCE_THRESHOLD);
    assert!(filter.consume_if_threshold_reached(DEBOUNCE_THRESHOLD));
}

#[test]
fn spurious_interrupt_is_ignored() {
    let filter = DebounceFilter::new();
    let mut line = MockLine::new();

    assert!(!on_button_interrupt(&mut line, &filter));
    assert_eq!(line.acknowledged(), 0);
    assert_eq!(filter.pending(), 0);
}
