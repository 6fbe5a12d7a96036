use crate::error::NnError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How freshly created parameters are filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter gets the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws one value.
    ///
    /// # Errors
    /// `NnError::InvalidInit` for an empty or non-finite uniform range, or a
    /// negative or non-finite standard deviation.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NnError> {
        Ok(self.sample_n(1, rng)?[0])
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, NnError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low < high && (high - low).is_finite()) {
                    return Err(NnError::InvalidInit(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() {
                    return Err(NnError::InvalidInit(format!(
                        "normal(mean={}, std={}) is not finite",
                        mean, std
                    )));
                }
                let dist = Normal::new(mean, std).map_err(|e| {
                    NnError::InvalidInit(format!("normal(mean={}, std={}): {}", mean, std, e))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(value) => Ok(vec![value; n]),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
