//! Ring buffer for emitted trace lines.
//!
//! Every line the tracer writes is also recorded here, bounded in size with
//! the oldest lines evicted first. Tests and interactive sessions read
//! recent output from the buffer instead of capturing a stream.

use std::collections::VecDeque;

// =============================================================================
// Line Buffer
// =============================================================================

/// A bounded ring buffer of emitted lines, oldest first.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    max_size: usize,
    evicted: u64,
}

/// Statistics about a [`LineBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineBufferStats {
    /// Number of lines currently held.
    pub line_count: usize,
    /// Number of lines evicted since creation.
    pub evicted: u64,
}

impl LineBuffer {
    /// Creates a buffer holding at most `max_size` lines.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_size.min(256)),
            max_size,
            evicted: 0,
        }
    }

    /// Records a line, evicting the oldest if the buffer is full.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.max_size {
            self.lines.pop_front();
            self.evicted += 1;
        }
    }

    /// Returns the number of lines currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the most recent `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .skip(self.lines.len().saturating_sub(n))
            .map(String::as_str)
    }

    /// Removes and returns all lines, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        self.lines.drain(..).collect()
    }

    /// Discards all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> LineBufferStats {
        LineBufferStats {
            line_count: self.lines.len(),
            evicted: self.evicted,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
