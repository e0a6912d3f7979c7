//! Geometric level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[non_exhaustive]
pub enum GeometricError {
    /// The probability `p` must be in the range `(0, 1)`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A level generator using a geometric distribution.
///
/// The height of a new pillar is decided by repeated coin flips: starting
/// from a height of 1, each flip that lands heads (probability `p`) raises
/// the pillar by one level, and the first tails stops. The resulting
/// heights follow a geometric distribution; with the fair coin of
/// [`Geometric::fair`], a height of `h` occurs with probability `2^-h`.
///
/// The distribution is not truncated: arbitrarily tall pillars are merely
/// exponentially unlikely, and the owning list grows its head to match.
#[derive(Clone, Debug)]
pub struct Geometric {
    /// The probability that a node is present in the next level.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator with `p` as the probability
    /// that a given node is present in the next level.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1; [`GeometricError::InvalidProbability`]
    /// is returned otherwise.
    #[inline]
    pub fn new(p: f64) -> Result<Self, GeometricError> {
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric {
            p,
            rng: SmallRng::from_os_rng(),
        })
    }

    /// Like [`Geometric::new`], but seeded so that the sequence of heights
    /// (and hence the structure of the owning list) is reproducible.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1; [`GeometricError::InvalidProbability`]
    /// is returned otherwise.
    #[inline]
    pub fn with_seed(p: f64, seed: u64) -> Result<Self, GeometricError> {
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric {
            p,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// A generator flipping a fair coin, so that a pillar of height `h`
    /// occurs with probability `2^-h`.
    #[inline]
    #[must_use]
    pub fn fair() -> Self {
        Geometric {
            p: 0.5,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// A seeded fair-coin generator; see [`Geometric::with_seed`].
    #[inline]
    #[must_use]
    pub fn fair_with_seed(seed: u64) -> Self {
        Geometric {
            p: 0.5,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl LevelGenerator for Geometric {
    #[inline]
    fn height(&mut self) -> usize {
        let mut h = 1;
        while self.rng.random_bool(self.p) {
            h += 1;
        }
        h
    }
}
