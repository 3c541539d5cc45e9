//! The switches and rates behind the game's deliberate defects
use crate::consts;
use rand::distr::{Bernoulli, BernoulliError};
use serde::Deserialize;
use std::num::NonZeroU64;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "RawAnomalies")]
pub(crate) struct Anomalies {
    /// On every tick whose number is a multiple of this, the snake may turn
    /// straight back into itself.  `None` disables this.
    pub(crate) reversal_period: Option<NonZeroU64>,

    /// Decides, once per apple spawn, whether the spawn ignores occupied cells
    pub(crate) spawn_bypass: Bernoulli,

    /// Random cell draws made by one apple spawn before it gives up
    pub(crate) spawn_attempts: u32,

    /// Whether moving west onto an apple on an even row duplicates the apple
    /// instead of eating it
    pub(crate) phantom_apples: bool,

    /// Whether the board has an invisible barrier
    pub(crate) invisible_barrier: bool,
}

impl Anomalies {
    /// A rule set with every defect switched off
    #[cfg(test)]
    pub(crate) fn none() -> Anomalies {
        Anomalies {
            reversal_period: None,
            spawn_bypass: Bernoulli::new(0.0).expect("0 should be a valid probability"),
            spawn_attempts: consts::SPAWN_ATTEMPTS,
            phantom_apples: false,
            invisible_barrier: false,
        }
    }

    /// Is a 180° turn permitted on tick number `tick`?
    pub(crate) fn allows_reversal(&self, tick: u64) -> bool {
        self.reversal_period
            .is_some_and(|period| tick % period.get() == 0)
    }

    pub(crate) fn with_bypass_probability(mut self, p: f64) -> Result<Anomalies, AnomalyError> {
        self.spawn_bypass = Bernoulli::new(p).map_err(|e| AnomalyError::Probability(p, e))?;
        Ok(self)
    }
}

impl Default for Anomalies {
    fn default() -> Anomalies {
        Anomalies {
            reversal_period: NonZeroU64::new(consts::REVERSAL_PERIOD),
            spawn_bypass: Bernoulli::new(consts::SPAWN_BYPASS_PROBABILITY)
                .expect("SPAWN_BYPASS_PROBABILITY should be between 0 and 1"),
            spawn_attempts: consts::SPAWN_ATTEMPTS,
            phantom_apples: true,
            invisible_barrier: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawAnomalies {
    reversal_period: u64,
    spawn_bypass_probability: f64,
    spawn_attempts: u32,
    phantom_apples: bool,
    invisible_barrier: bool,
}

impl Default for RawAnomalies {
    fn default() -> RawAnomalies {
        RawAnomalies {
            reversal_period: consts::REVERSAL_PERIOD,
            spawn_bypass_probability: consts::SPAWN_BYPASS_PROBABILITY,
            spawn_attempts: consts::SPAWN_ATTEMPTS,
            phantom_apples: true,
            invisible_barrier: true,
        }
    }
}

impl TryFrom<RawAnomalies> for Anomalies {
    type Error = AnomalyError;

    fn try_from(value: RawAnomalies) -> Result<Anomalies, AnomalyError> {
        if value.spawn_attempts == 0 {
            return Err(AnomalyError::NoAttempts);
        }
        let anomalies = Anomalies {
            reversal_period: NonZeroU64::new(value.reversal_period),
            spawn_attempts: value.spawn_attempts,
            phantom_apples: value.phantom_apples,
            invisible_barrier: value.invisible_barrier,
            ..Anomalies::default()
        };
        anomalies.with_bypass_probability(value.spawn_bypass_probability)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum AnomalyError {
    #[error("spawn bypass probability {0} is not between 0 and 1")]
    Probability(f64, #[source] BernoulliError),
    #[error("spawn-attempts must be at least 1")]
    NoAttempts,
}
