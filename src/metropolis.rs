// metropolis.rs - Single-spin-flip Metropolis sampler producing lattice frames

use crate::config::{check_beta, check_coupling};
use crate::error::ConfigError;
use crate::lattice::Lattice;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// One recorded (lattice, energy) pair.
///
/// Frames are never mutated. A rejected step shares the previous lattice
/// through the `Arc` but is still its own step record.
#[derive(Debug, Clone)]
pub struct Frame {
    pub lattice: Arc<Lattice>,
    pub energy: f64,
}

impl Frame {
    pub fn new(lattice: Lattice, coupling: f64) -> Self {
        let energy = lattice.energy(coupling);
        Self { lattice: Arc::new(lattice), energy }
    }
}

/// Returned by [`Sampler::step`] for book-keeping in the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub site: (usize, usize),
    pub delta_e: f64,
    pub accepted: bool,
}

/// Ordered frames from one call to [`Sampler::simulate`].
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub frames: Vec<Frame>,
    pub steps: usize,
    pub accepted: usize,
    pub retain_all_frames: bool,
}

impl SimulationRun {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Newest frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 { 0.0 } else { self.accepted as f64 / self.steps as f64 }
    }
}

/// Metropolis rule: accept any move with `ΔE <= 0` without consuming
/// randomness, otherwise accept with probability `exp(-B·ΔE)`.
pub fn accept(delta_e: f64, beta: f64, rng: &mut impl Rng) -> bool {
    if delta_e <= 0.0 {
        true
    } else {
        rng.gen::<f64>() < (-beta * delta_e).exp()
    }
}

/// Sequential sampler. All randomness comes from the single owned `rng`,
/// so a seeded generator reproduces the whole run.
pub struct Sampler<R: Rng> {
    coupling: f64,
    beta: f64,
    rng: R,
}

impl<R: Rng> Sampler<R> {
    /// Fails on a zero or non-finite J, or a negative or non-finite B.
    pub fn new(coupling: f64, beta: f64, rng: R) -> Result<Self, ConfigError> {
        check_coupling(coupling)?;
        check_beta(beta)?;
        Ok(Self { coupling, beta, rng })
    }

    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Propose one flip from `prev` and accept or reject it.
    ///
    /// Draws the row, then the column, then (only when ΔE > 0) one uniform
    /// for the acceptance test.
    pub fn step(&mut self, prev: &Frame) -> (Frame, StepInfo) {
        let n = prev.lattice.size();
        let i = self.rng.gen_range(0..n);
        let j = self.rng.gen_range(0..n);

        let proposed = prev.lattice.flipped(i, j);
        let e_new = proposed.energy(self.coupling);
        let delta_e = e_new - prev.energy;

        let accepted = accept(delta_e, self.beta, &mut self.rng);
        let frame = if accepted {
            Frame { lattice: Arc::new(proposed), energy: e_new }
        } else {
            prev.clone()
        };

        (frame, StepInfo { site: (i, j), delta_e, accepted })
    }

    /// Run `n_steps` Metropolis steps starting from `initial`.
    pub fn simulate(
        &mut self,
        initial: Lattice,
        n_steps: usize,
        retain_all_frames: bool,
    ) -> SimulationRun {
        self.simulate_with(initial, n_steps, retain_all_frames, |_, _| {})
    }

    /// As [`Sampler::simulate`], calling `on_step(k, info)` after step `k`.
    ///
    /// With `retain_all_frames` every step proposes from the immediately
    /// preceding frame and all `n_steps + 1` frames are returned.
    ///
    /// Without it the frames live in a window: each step proposes from the
    /// frame at the head of the window, appends the result, then drops the
    /// head. Proposing from the head rather than the tail is kept on purpose
    /// even though it only equals "the latest frame" while the window holds
    /// a single frame between steps. At most two frames are alive at once and
    /// one frame is returned.
    pub fn simulate_with<F>(
        &mut self,
        initial: Lattice,
        n_steps: usize,
        retain_all_frames: bool,
        mut on_step: F,
    ) -> SimulationRun
    where
        F: FnMut(usize, &StepInfo),
    {
        let first = Frame::new(initial, self.coupling);
        debug!(
            size = first.lattice.size(),
            energy = first.energy,
            coupling = self.coupling(),
            beta = self.beta(),
            n_steps,
            retain_all_frames,
            "starting metropolis run"
        );

        let mut accepted = 0usize;
        let mut record = |k: usize, info: &StepInfo| {
            if info.accepted {
                accepted += 1;
            }
            trace!("step {}/{}, {}% complete", k, n_steps, 100 * k / n_steps.max(1));
            on_step(k, info);
        };

        let frames = if retain_all_frames {
            let mut frames = Vec::with_capacity(n_steps + 1);
            frames.push(first);
            for k in 0..n_steps {
                let (next, info) = self.step(&frames[k]);
                frames.push(next);
                record(k, &info);
            }
            frames
        } else {
            let mut window: VecDeque<Frame> = VecDeque::with_capacity(2);
            window.push_back(first);
            for k in 0..n_steps {
                let (next, info) = match window.front() {
                    Some(head) => self.step(head),
                    None => break,
                };
                window.push_back(next);
                window.pop_front();
                record(k, &info);
            }
            window.into_iter().collect()
        };

        debug!(frames = frames.len(), accepted, "metropolis run finished");

        SimulationRun { frames, steps: n_steps, accepted, retain_all_frames }
    }
}
