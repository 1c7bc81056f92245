// lattice.rs - Square Ising lattice with fixed (zero) boundary

use crate::config::{check_size, check_thresh};
use crate::error::ConfigError;
use rand::Rng;

/// Orthogonal neighbor offsets (up, down, left, right).
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An N×N grid of spins, each exactly +1 or -1.
///
/// Cells are stored row-major. Sites outside the grid are treated as spin 0,
/// so edge and corner cells have fewer neighbor terms and nothing wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    n: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Sample every cell independently: +1 with probability `thresh`, else -1.
    ///
    /// Draws N² uniforms from `rng` in row-major order. Fails before drawing
    /// anything if `n == 0` or `thresh` is outside [0, 1].
    pub fn initialize(rng: &mut impl Rng, n: usize, thresh: f64) -> Result<Self, ConfigError> {
        check_size(n)?;
        check_thresh(thresh)?;
        let spins = (0..n * n)
            .map(|_| if rng.gen::<f64>() < thresh { 1 } else { -1 })
            .collect();
        Ok(Self { n, spins })
    }

    /// Every cell set to `spin` (negative means -1, anything else +1).
    pub fn uniform(n: usize, spin: i8) -> Result<Self, ConfigError> {
        check_size(n)?;
        let spin = if spin < 0 { -1 } else { 1 };
        Ok(Self { n, spins: vec![spin; n * n] })
    }

    /// Build a lattice from explicit rows of ±1.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self, ConfigError> {
        let n = rows.len();
        if n == 0 {
            return Err(ConfigError::ZeroSize(0));
        }

        let mut spins = Vec::with_capacity(n * n);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(ConfigError::NotSquare { row, len: cells.len(), expected: n });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value != 1 && value != -1 {
                    return Err(ConfigError::BadSpin { row, col, value });
                }
                spins.push(value);
            }
        }

        Ok(Self { n, spins })
    }

    /// Side length N.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of cells, N².
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.spins[i * self.n + j]
    }

    /// Row-major spin slice.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> + '_ {
        self.spins.chunks(self.n.max(1))
    }

    /// Copy of this lattice with only cell (i, j) negated.
    pub fn flipped(&self, i: usize, j: usize) -> Self {
        let mut next = self.clone();
        next.spins[i * self.n + j] = -next.spins[i * self.n + j];
        next
    }

    /// Σ spins over the whole grid.
    pub fn net_spin(&self) -> i64 {
        self.spins.iter().map(|&s| s as i64).sum()
    }

    /// Sum of the up to four in-grid orthogonal neighbors of (i, j).
    pub fn neighbor_sum(&self, i: usize, j: usize) -> i32 {
        let n = self.n as isize;
        OFFSETS
            .iter()
            .filter_map(|&(di, dj)| {
                let (ni, nj) = (i as isize + di, j as isize + dj);
                if (0..n).contains(&ni) && (0..n).contains(&nj) {
                    Some(self.get(ni as usize, nj as usize) as i32)
                } else {
                    None
                }
            })
            .sum()
    }

    /// E = -J Σ_cells s_ij · (sum of orthogonal neighbors).
    ///
    /// Each bond is counted once from each endpoint.
    pub fn energy(&self, coupling: f64) -> f64 {
        let mut total: i64 = 0;
        for i in 0..self.n {
            for j in 0..self.n {
                total += self.get(i, j) as i64 * self.neighbor_sum(i, j) as i64;
            }
        }
        if total == 0 {
            // avoid -0
            return 0.0;
        }
        -coupling * total as f64
    }

    /// Energy change from flipping (i, j), under the same double-counting
    /// convention as [`Lattice::energy`].
    pub fn flip_delta(&self, i: usize, j: usize, coupling: f64) -> f64 {
        4.0 * coupling * (self.get(i, j) as i32 * self.neighbor_sum(i, j)) as f64
    }
}
