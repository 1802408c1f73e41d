//! Konami-code key sequence detection.
//!
//! Pure logic, no browser APIs: the DOM `keydown` listener in `lib.rs` owns a
//! [`SequenceDetector`] and feeds it key identifier strings. Kept free of
//! `web_sys` so the matching rules can be tested natively.

use std::collections::VecDeque;

/// The classic trigger sequence, as browser `KeyboardEvent.key` identifiers.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding-window matcher over a fixed target sequence of key identifiers.
///
/// Holds the last `target.len()` keys seen (oldest discarded); the buffer is
/// never cleared, so entering the target twice back-to-back matches twice.
/// Comparison is ordered and case-sensitive ("B" does not match "b").
pub struct SequenceDetector {
    target: &'static [&'static str],
    buffer: VecDeque<String>,
}

impl SequenceDetector {
    pub fn new(target: &'static [&'static str]) -> Self {
        Self {
            target,
            buffer: VecDeque::with_capacity(target.len() + 1),
        }
    }

    /// Detector primed with [`KONAMI_SEQUENCE`].
    pub fn konami() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }

    /// Record one key press. Returns `true` exactly when the buffered window
    /// equals the full target sequence. Unrecognized identifiers are buffered
    /// like any other key and simply fail the comparison.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.buffer.push_back(key.to_owned());
        if self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == self.target.len()
            && self.buffer.iter().zip(self.target).all(|(got, want)| got == want)
    }

    /// Number of keys currently buffered (at most `target.len()`).
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}
