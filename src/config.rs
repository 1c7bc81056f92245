// config.rs - Run parameters (single source of truth)

use crate::error::ConfigError;

/// Simulation and playback parameters.
///
/// `Default` carries the reference values: a 100×100 lattice started
/// three-quarters up, J = 1, B = 1, 100 000 steps, 200 display frames at 60 fps.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Lattice side length N.
    pub size:        usize,
    /// Probability that a cell starts at +1.
    pub thresh:      f64,
    /// Exchange constant J.
    pub coupling:    f64,
    /// Inverse temperature B, in units of 1/J.
    pub beta:        f64,
    /// Number of Metropolis steps.
    pub steps:       usize,
    /// Keep every frame (true) or only a bounded window (false).
    pub save_frames: bool,
    /// Playback rate for the animation.
    pub fps:         u32,
    /// Number of display frames rendered.
    pub nframes:     usize,
    /// RNG seed; drawn from entropy when absent.
    pub seed:        Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size:        100,
            thresh:      0.75,
            coupling:    1.0,
            beta:        1.0,
            steps:       100_000,
            save_frames: false,
            fps:         60,
            nframes:     200,
            seed:        None,
        }
    }
}

pub(crate) fn check_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 { Err(ConfigError::ZeroSize(size)) } else { Ok(()) }
}

/// NaN fails the range test as well.
pub(crate) fn check_thresh(thresh: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&thresh) { Ok(()) } else { Err(ConfigError::Threshold(thresh)) }
}

pub(crate) fn check_coupling(coupling: f64) -> Result<(), ConfigError> {
    if coupling.is_finite() && coupling != 0.0 { Ok(()) } else { Err(ConfigError::Coupling(coupling)) }
}

pub(crate) fn check_beta(beta: f64) -> Result<(), ConfigError> {
    if beta.is_finite() && beta >= 0.0 { Ok(()) } else { Err(ConfigError::Beta(beta)) }
}

impl SimConfig {
    /// Reject out-of-range parameters before anything is simulated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.size)?;
        check_thresh(self.thresh)?;
        check_coupling(self.coupling)?;
        check_beta(self.beta)?;
        if self.fps == 0 {
            return Err(ConfigError::ZeroDisplay { field: "fps" });
        }
        if self.nframes == 0 {
            return Err(ConfigError::ZeroDisplay { field: "nframes" });
        }
        Ok(())
    }

    /// Milliseconds between rendered frames.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / self.fps.max(1) as u64
    }
}
