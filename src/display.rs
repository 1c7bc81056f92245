// display.rs - Playback of a frame sequence (terminal grid, CSV trace)
//
// Only reads `frames.len()`, `frame.lattice` and `frame.energy`; nothing in
// the sampler depends on this module.

use crate::error::DisplayError;
use crate::metropolis::Frame;
use std::fmt;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::debug;

const UP: char = '█';
const DOWN: char = ' ';

/// Map display frame `f_display` of `nframes` onto one of `n_source` frames:
/// `floor(n_source * f_display / nframes)`, clamped to the last frame.
pub fn source_index(f_display: usize, nframes: usize, n_source: usize) -> usize {
    if nframes == 0 || n_source == 0 {
        return 0;
    }
    let idx = (n_source as u128 * f_display as u128) / nframes as u128;
    idx.min(n_source as u128 - 1) as usize
}

/// One line of playback status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine {
    pub frame:    usize,
    pub energy:   f64,
    pub net_spin: i64,
}

impl StatusLine {
    pub fn new(f_display: usize, frame: &Frame) -> Self {
        Self { frame: f_display, energy: frame.energy, net_spin: frame.lattice.net_spin() }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame: {} | Energy: {} | Net Spin: {}", self.frame, self.energy, self.net_spin)
    }
}

/// Something that consumes display frames.
pub trait FrameSink {
    fn show(&mut self, source: usize, frame: &Frame, status: &StatusLine) -> Result<(), DisplayError>;

    fn finish(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// Draws the lattice as text followed by the status line.
pub struct TerminalRenderer<W: Write> {
    out:   W,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// `clear` redraws in place using ANSI escapes.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn show(&mut self, _source: usize, frame: &Frame, status: &StatusLine) -> Result<(), DisplayError> {
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        for row in frame.lattice.rows() {
            let line: String = row.iter().map(|&s| if s > 0 { UP } else { DOWN }).collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{status}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes one CSV row per display frame: `frame,source,energy,net_spin`.
pub struct CsvTrace<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> CsvTrace<W> {
    pub fn new(out: W) -> Result<Self, DisplayError> {
        let mut wtr = csv::WriterBuilder::new().from_writer(out);
        wtr.write_record(["frame", "source", "energy", "net_spin"])?;
        Ok(Self { wtr })
    }

    pub fn into_inner(self) -> Result<W, DisplayError> {
        self.wtr
            .into_inner()
            .map_err(|e| DisplayError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}

impl<W: Write> FrameSink for CsvTrace<W> {
    fn show(&mut self, source: usize, _frame: &Frame, status: &StatusLine) -> Result<(), DisplayError> {
        self.wtr.write_record(&[
            status.frame.to_string(),
            source.to_string(),
            status.energy.to_string(),
            status.net_spin.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DisplayError> {
        self.wtr.flush()?;
        Ok(())
    }
}

/// Play `nframes` display frames sampled evenly from `frames`, sleeping
/// `pace` between them when given.
pub fn animate(
    frames: &[Frame],
    nframes: usize,
    pace: Option<Duration>,
    sink: &mut impl FrameSink,
) -> Result<(), DisplayError> {
    if frames.is_empty() {
        return Err(DisplayError::NoFrames);
    }
    if nframes == 0 {
        return Err(DisplayError::NoDisplayFrames);
    }

    for f_display in 0..nframes {
        let source = source_index(f_display, nframes, frames.len());
        let frame = &frames[source];
        let status = StatusLine::new(f_display, frame);
        debug!("{status}");
        sink.show(source, frame, &status)?;
        if let Some(pace) = pace {
            thread::sleep(pace);
        }
    }
    sink.finish()
}
