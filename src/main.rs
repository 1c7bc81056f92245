//! Metropolis simulation of a 2D Ising lattice, with optional playback.
//!
//! Runs `--steps` single-spin-flip updates from a random lattice, prints a
//! run summary, and can animate the frames in the terminal (`--animate`) or
//! write the display trace to CSV (`--trace`).

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising::display::{animate, CsvTrace, TerminalRenderer};
use ising::observables::RunSummary;
use ising::utils::rng::run_rng;
use ising::{Lattice, Sampler, SimConfig};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "ising", version, about = "2D Ising model via single-spin-flip Metropolis")]
struct Cli {
    /// Side length of the square lattice
    #[arg(long, short = 'N', default_value_t = 100)]
    size: usize,

    /// Probability that a dipole starts in the +1 state
    #[arg(long, default_value_t = 0.75)]
    thresh: f64,

    /// Exchange energy constant J
    #[arg(long, short = 'J', default_value_t = 1.0, allow_negative_numbers = true)]
    coupling: f64,

    /// Inverse temperature B (units of 1/J)
    #[arg(long, short = 'B', default_value_t = 1.0)]
    beta: f64,

    /// Number of simulation steps
    #[arg(long, short = 'n', default_value_t = 100_000)]
    steps: usize,

    /// Keep every simulated frame instead of a bounded window
    #[arg(long, default_value_t = false)]
    save_frames: bool,

    /// Render FPS
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to render
    #[arg(long, default_value_t = 200)]
    nframes: usize,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play the frames back in the terminal
    #[arg(long, default_value_t = false)]
    animate: bool,

    /// Write the display trace (frame, source, energy, net spin) to CSV
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Print energy and net spin of every retained frame
    #[arg(long, default_value_t = false)]
    print_frames: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            size:        self.size,
            thresh:      self.thresh,
            coupling:    self.coupling,
            beta:        self.beta,
            steps:       self.steps,
            save_frames: self.save_frames,
            fps:         self.fps,
            nframes:     self.nframes,
            seed:        self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cfg = args.config();
    cfg.validate()?;
    info!("configuration: {cfg:?}");

    let (mut rng, seed) = run_rng(cfg.seed);
    info!(seed, "seeded run");

    let lattice = Lattice::initialize(&mut rng, cfg.size, cfg.thresh)?;
    let mut sampler = Sampler::new(cfg.coupling, cfg.beta, rng)?;

    let bar = ProgressBar::new(cfg.steps as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} ({percent}%) [{elapsed_precise}]",
    )?);

    let run = sampler.simulate_with(lattice, cfg.steps, cfg.save_frames, |_, _| bar.inc(1));
    bar.finish();

    if args.print_frames {
        for (k, frame) in run.frames.iter().enumerate() {
            println!("{k}: energy = {}, net spin = {}", frame.energy, frame.lattice.net_spin());
        }
    }

    if let Some(summary) = RunSummary::from_run(&run) {
        println!("{summary}");
    }

    if let Some(path) = &args.trace {
        let mut sink = CsvTrace::new(BufWriter::new(File::create(path)?))?;
        animate(&run.frames, cfg.nframes, None, &mut sink)?;
        info!("trace written to {}", path.display());
    }

    if args.animate {
        let pace = Duration::from_millis(cfg.frame_interval_ms());
        let mut sink = TerminalRenderer::new(io::stdout().lock(), true);
        animate(&run.frames, cfg.nframes, Some(pace), &mut sink)?;
    }

    Ok(())
}
