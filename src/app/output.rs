//! Line rendering of listed records.
//!
//! Every record becomes exactly one line. [`LineWriter`] flushes after each
//! page so output shows up while later pages are still being fetched.

#![warn(clippy::all, rust_2018_idioms)]

use std::io::Write;

use crate::app::data_plane::cloudwatch_logs::{LogEvent, LogGroup, LogStream};
use crate::error::Result;

/// A record that renders as a single line of text
pub trait Line {
    fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()>;
}

impl Line for LogGroup {
    fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.name)
    }
}

impl Line for LogStream {
    fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.name)
    }
}

impl Line for LogEvent {
    fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{{{}/{}}} {}", self.stream_name, self.event_id, self.message)
    }
}

/// Writes pages of records as lines
pub struct LineWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write one page and flush it
    pub fn write_page<T: Line>(&mut self, records: &[T]) -> Result<()> {
        for record in records {
            record.write_line(&mut self.out)?;
            self.lines += 1;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
