//! Fixed-boundary energy: hand-computed reference values.

use ising::{Frame, Lattice, Sampler};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_all_up_2x2() {
    // Each cell has two in-grid neighbors: 4 cells × (1·2) = 8, E = -J·8.
    let lat = Lattice::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();
    assert_eq!(lat.energy(1.0), -8.0);

    // The sampler's initial frame carries the same value.
    let mut sampler = Sampler::new(1.0, 1.0, ChaCha20Rng::seed_from_u64(0)).unwrap();
    let run = sampler.simulate(lat, 0, true);
    assert_eq!(run.frames[0].energy, -8.0);
}

#[test]
fn test_all_up_3x3() {
    // corners 4×2 + edges 4×3 + centre 1×4 = 24
    let lat = Lattice::uniform(3, 1).unwrap();
    assert_eq!(lat.energy(1.0), -24.0);
}

#[test]
fn test_checkerboard_is_maximal() {
    let lat = Lattice::from_rows(&[vec![1, -1], vec![-1, 1]]).unwrap();
    assert_eq!(lat.energy(1.0), 8.0);
}

#[test]
fn test_energy_scales_with_coupling() {
    let lat = Lattice::from_rows(&[
        vec![1, -1, 1],
        vec![1, 1, -1],
        vec![-1, 1, 1],
    ])
    .unwrap();
    let e1 = lat.energy(1.0);
    assert_eq!(lat.energy(2.0), 2.0 * e1);
    assert_eq!(lat.energy(-1.0), -e1);
}

#[test]
fn test_energy_is_pure() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let lat = Lattice::initialize(&mut rng, 12, 0.5).unwrap();
    let snapshot = lat.clone();
    assert_eq!(lat.energy(1.0), lat.energy(1.0));
    assert_eq!(lat, snapshot);
}

#[test]
fn test_no_wraparound() {
    // A toroidal lattice would couple column 0 and column 2 here.
    let lat = Lattice::from_rows(&[
        vec![1, 1, -1],
        vec![1, 1, -1],
        vec![1, 1, -1],
    ])
    .unwrap();
    // Bonds: horizontal 3×(+1) + 3×(-1), vertical 6×(+1); counted twice.
    assert_eq!(lat.energy(1.0), -12.0);
    assert_eq!(Frame::new(lat, 1.0).energy, -12.0);
}

#[test]
fn test_initialize_extremes() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let up = Lattice::initialize(&mut rng, 7, 1.0).unwrap();
    assert!(up.spins().iter().all(|&s| s == 1));
    let down = Lattice::initialize(&mut rng, 7, 0.0).unwrap();
    assert!(down.spins().iter().all(|&s| s == -1));
}

#[test]
fn test_initialize_fraction() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let lat = Lattice::initialize(&mut rng, 100, 0.75).unwrap();
    let up = lat.spins().iter().filter(|&&s| s == 1).count() as f64;
    let frac = up / lat.len() as f64;
    assert!((frac - 0.75).abs() < 0.02, "fraction of up spins {frac:.3}");
}
