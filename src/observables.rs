// observables.rs - Frame measurements and run summary

use crate::metropolis::{Frame, SimulationRun};
use std::fmt;

/// Net spin per site, in [-1, 1].
pub fn magnetization(frame: &Frame) -> f64 {
    let cells = frame.lattice.len();
    if cells == 0 { 0.0 } else { frame.lattice.net_spin() as f64 / cells as f64 }
}

/// Welford online stats; `RunSummary` keeps one for energy and one for
/// magnetization over the retained frames.
#[derive(Debug, Default, Clone)]
pub struct OnlineStats {
    n:    u64,
    mean: f64,
    m2:   f64,
}

impl OnlineStats {
    pub fn push(&mut self, x: f64) {
        self.n += 1;
        let delta  = x - self.mean;
        self.mean += delta / self.n as f64;
        let delta2 = x - self.mean;
        self.m2   += delta * delta2;
    }
    pub fn count(&self) -> u64 { self.n }
    pub fn mean(&self) -> f64 { self.mean }
    pub fn var(&self)  -> f64 { if self.n > 1 { self.m2 / (self.n - 1) as f64 } else { 0.0 } }
    pub fn std(&self)  -> f64 { self.var().sqrt() }
}

/// End-of-run report over the retained frames.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps:          usize,
    pub accepted:       usize,
    pub retained:       usize,
    pub final_energy:   f64,
    pub final_net_spin: i64,
    pub energy:         OnlineStats,
    pub magnetization:  OnlineStats,
}

impl RunSummary {
    /// `None` for an empty run.
    pub fn from_run(run: &SimulationRun) -> Option<Self> {
        let last = run.last()?;

        let mut energy = OnlineStats::default();
        let mut mag = OnlineStats::default();
        for frame in &run.frames {
            energy.push(frame.energy);
            mag.push(magnetization(frame));
        }

        Some(Self {
            steps: run.steps,
            accepted: run.accepted,
            retained: run.len(),
            final_energy: last.energy,
            final_net_spin: last.lattice.net_spin(),
            energy,
            magnetization: mag,
        })
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 { 0.0 } else { self.accepted as f64 / self.steps as f64 }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps:           {}", self.steps)?;
        writeln!(f, "Accepted:        {} ({:.2}%)", self.accepted, 100.0 * self.acceptance_rate())?;
        writeln!(f, "Frames retained: {}", self.retained)?;
        writeln!(f, "Final energy:    {}", self.final_energy)?;
        writeln!(f, "Final net spin:  {}", self.final_net_spin)?;
        writeln!(f, "<E> = {:.4} ± {:.4}", self.energy.mean(), self.energy.std())?;
        write!(f, "<m> = {:.4} ± {:.4}", self.magnetization.mean(), self.magnetization.std())
    }
}
