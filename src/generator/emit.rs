//! Unit stream emission.
//!
//! All output formatting lives here: a rendered unit is written as-is, newline
//! terminated, followed by a fixed number of blank lines. Region markers go out
//! through [`Emitter::line`] so a generator pass never touches the writer
//! directly.

use std::io::{self, Write};

/// Writes rendered units to an output stream in domain order.
pub struct Emitter<W: Write> {
    out: W,
    gap: usize,
}

impl<W: Write> Emitter<W> {
    /// One blank line after each unit (the stub-case streams).
    pub fn new(out: W) -> Self {
        Self::with_gap(out, 1)
    }

    /// `gap` blank lines after each unit (the clamp stream uses 2).
    pub fn with_gap(out: W, gap: usize) -> Self {
        Self { out, gap }
    }

    /// Writes one unit followed by the configured blank-line gap.
    pub fn unit(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        for _ in 0..self.gap {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Writes one raw line with no gap, e.g. a region marker.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }
}
