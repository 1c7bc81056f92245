pub mod config;
pub mod display;
pub mod error;
pub mod lattice;
pub mod metropolis;
pub mod observables;
pub mod utils;

pub use config::SimConfig;
pub use error::{ConfigError, DisplayError};
pub use lattice::Lattice;
pub use metropolis::{Frame, Sampler, SimulationRun, StepInfo};
