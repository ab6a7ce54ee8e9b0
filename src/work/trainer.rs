// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/work/trainer.rs
// Version: 1.0.1
//
// This file implements the default work provider: a small feed-forward
// regression network trained by plain SGD. One work unit is one training step
// on a freshly drawn sample, and its quality score is that step's squared
// error.
//
// Tree Location:
// - src/work/trainer.rs (default work provider)
// - Depends on: rand, rand_distr, tokio, work

use super::{ComputeError, WorkUnitProvider};
use async_trait::async_trait;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::{Arc, Mutex};

const LOG_TARGET: &str = "helios::work::trainer";

pub const INPUT_SIZE: usize = 10;
pub const HIDDEN_SIZE: usize = 50;
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// 10 -> 50 (ReLU) -> 1
struct FeedForwardNet {
    w1: Vec<[f64; INPUT_SIZE]>,
    b1: Vec<f64>,
    w2: Vec<f64>,
    b2: f64,
}

impl FeedForwardNet {
    fn new(rng: &mut StdRng) -> Self {
        // Uniform(-1/sqrt(fan_in), 1/sqrt(fan_in)) per layer
        let bound1 = 1.0 / (INPUT_SIZE as f64).sqrt();
        let bound2 = 1.0 / (HIDDEN_SIZE as f64).sqrt();

        let w1 = (0..HIDDEN_SIZE)
            .map(|_| {
                let mut row = [0.0; INPUT_SIZE];
                for w in row.iter_mut() {
                    *w = rng.gen_range(-bound1..bound1);
                }
                row
            })
            .collect();
        let b1 = (0..HIDDEN_SIZE).map(|_| rng.gen_range(-bound1..bound1)).collect();
        let w2 = (0..HIDDEN_SIZE).map(|_| rng.gen_range(-bound2..bound2)).collect();
        let b2 = rng.gen_range(-bound2..bound2);

        Self { w1, b1, w2, b2 }
    }

    /// Forward pass, MSE loss, backward pass and SGD update. Returns the loss
    /// of the forward pass (before the update).
    fn train_step(&mut self, input: &[f64; INPUT_SIZE], target: f64, lr: f64) -> f64 {
        let mut pre = vec![0.0; HIDDEN_SIZE];
        let mut hidden = vec![0.0; HIDDEN_SIZE];
        for j in 0..HIDDEN_SIZE {
            let z = self.w1[j]
                .iter()
                .zip(input.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + self.b1[j];
            pre[j] = z;
            hidden[j] = z.max(0.0);
        }

        let output = self
            .w2
            .iter()
            .zip(hidden.iter())
            .map(|(w, h)| w * h)
            .sum::<f64>()
            + self.b2;
        let error = output - target;
        let loss = error * error;

        let d_out = 2.0 * error;
        for j in 0..HIDDEN_SIZE {
            let d_hidden = if pre[j] > 0.0 { d_out * self.w2[j] } else { 0.0 };
            self.w2[j] -= lr * d_out * hidden[j];
            self.b1[j] -= lr * d_hidden;
            for (w, x) in self.w1[j].iter_mut().zip(input.iter()) {
                *w -= lr * d_hidden * x;
            }
        }
        self.b2 -= lr * d_out;

        loss
    }
}

struct TrainerState {
    net: FeedForwardNet,
    rng: StdRng,
    learning_rate: f64,
    steps: u64,
}

impl TrainerState {
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    fn step(&mut self) -> Result<f64, ComputeError> {
        let mut input = [0.0; INPUT_SIZE];
        for x in input.iter_mut() {
            *x = self.standard_normal();
        }
        let target = self.standard_normal();

        let loss = self.net.train_step(&input, target, self.learning_rate);
        self.steps += 1;

        if !loss.is_finite() {
            warn!(target: LOG_TARGET, "Training diverged at step {}, reinitialising weights", self.steps);
            self.net = FeedForwardNet::new(&mut self.rng);
            return Err(ComputeError::Diverged { loss });
        }

        debug!(target: LOG_TARGET, "Step {} loss {:.6}", self.steps, loss);
        Ok(loss)
    }
}

/// Default work provider. Steps run on the blocking pool so the runtime keeps
/// serving control requests while the network trains.
#[derive(Clone)]
pub struct ModelTrainer {
    state: Arc<Mutex<TrainerState>>,
}

impl ModelTrainer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let net = FeedForwardNet::new(&mut rng);
        Self {
            state: Arc::new(Mutex::new(TrainerState {
                net,
                rng,
                learning_rate: DEFAULT_LEARNING_RATE,
                steps: 0,
            })),
        }
    }

    pub fn with_learning_rate(self, learning_rate: f64) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.learning_rate = learning_rate;
        }
        self
    }

    pub fn steps(&self) -> u64 {
        self.state.lock().map(|s| s.steps).unwrap_or(0)
    }
}

impl Default for ModelTrainer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkUnitProvider for ModelTrainer {
    async fn perform_step(&self) -> Result<f64, ComputeError> {
        let state = Arc::clone(&self.state);
        tokio::task::spawn_blocking(move || {
            let mut state = state.lock().map_err(|_| ComputeError::TaskFailed {
                reason: "trainer state poisoned".to_string(),
            })?;
            state.step()
        })
        .await
        .map_err(|e| ComputeError::TaskFailed {
            reason: e.to_string(),
        })?
    }
}


// Changelog:
// - v1.0.1 (2026-10-19): Normal samples drawn with rand_distr::StandardNormal.
//   - Added a distribution check on the sampler.
// - v1.0.0 (2026-09-28): Initial model trainer.
//   - 10-50-1 ReLU regression net trained by SGD on blocking threads.
//   - Seedable; non-finite loss reports Diverged and reinitialises weights.
