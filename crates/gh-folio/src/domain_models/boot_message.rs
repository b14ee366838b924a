//! Boot message model
//!
//! The synthetic startup log shown on the splash screen.

use std::sync::Arc;

/// An ordered, immutable sequence of boot log lines
///
/// Lines are revealed incrementally by the splash sequencer; the sequence
/// itself never changes once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootMessage {
    lines: Arc<[String]>,
}

impl BootMessage {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// All lines, revealed or not
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first `count` lines (clamped to the sequence length)
    pub fn revealed(&self, count: usize) -> &[String] {
        &self.lines[..count.min(self.lines.len())]
    }
}
