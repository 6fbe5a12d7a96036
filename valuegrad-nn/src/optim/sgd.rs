use crate::error::NnError;
use crate::optim::optimizer_trait::Optimizer;
use valuegrad_core::Value;

/// Stochastic gradient descent with optional momentum and weight decay.
///
/// For each parameter `p` with gradient `g`:
/// `v = momentum * v + (g + weight_decay * p)` and `p = p - lr * v`.
/// With both options at zero this is plain `p = p - lr * g`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    velocity: Vec<f64>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
}

fn check_hyperparameter(name: &str, value: f64) -> Result<(), NnError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NnError::InvalidOptimizerConfig(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )))
    }
}

impl Sgd {
    /// Creates an optimizer over `params` (usually `module.parameters()`).
    ///
    /// # Errors
    /// `InvalidOptimizerConfig` if `lr` is negative or not finite, or if a
    /// parameter is not a leaf.
    pub fn new(params: Vec<Value>, lr: f64) -> Result<Self, NnError> {
        check_hyperparameter("lr", lr)?;
        for p in &params {
            p.try_data()?;
            if !p.is_leaf() {
                return Err(NnError::InvalidOptimizerConfig(format!(
                    "parameter {} is not a leaf",
                    p.id()
                )));
            }
        }
        log::debug!("SGD created for {} parameters (lr={})", params.len(), lr);
        Ok(Sgd {
            velocity: vec![0.0; params.len()],
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
        })
    }

    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, NnError> {
        check_hyperparameter("momentum", momentum)?;
        self.momentum = momentum;
        Ok(self)
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, NnError> {
        check_hyperparameter("weight_decay", weight_decay)?;
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate, e.g. for a decay schedule.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), NnError> {
        check_hyperparameter("lr", lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), NnError> {
        log::trace!("SGD step over {} parameters", self.params.len());
        for (p, v) in self.params.iter().zip(self.velocity.iter_mut()) {
            let data = p.try_data()?;
            let grad = p.try_grad()? + self.weight_decay * data;
            *v = self.momentum * *v + grad;
            p.set_data(data - self.lr * *v)?;
        }
        Ok(())
    }

    fn zero_grad(&self) -> Result<(), NnError> {
        for p in &self.params {
            // Fails on handles discarded by a rewind instead of panicking.
            p.try_grad()?;
            p.zero_grad();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
