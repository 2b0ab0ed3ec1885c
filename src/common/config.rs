//! Runtime configuration loaded from defaults, an optional JSON file and the
//! process environment, in that order of precedence (later wins).

use std::env;
use std::fs;

use log::LevelFilter;
use serde::Deserialize;

use crate::common::error::{EvalError, EvalResult};

pub const ENV_CONFIG: &str = "HOLDOUT_CONFIG";
pub const ENV_LOG_LEVEL: &str = "HOLDOUT_LOG_LEVEL";
pub const ENV_ZERO_DIVISION: &str = "HOLDOUT_ZERO_DIVISION";

/// Snapshot of configuration values consumed by the core.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EvalCfg {
    pub log_level: LevelFilter,
    /// Value reported for a precision/recall ratio whose denominator is zero.
    pub zero_division: f64,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            zero_division: 0.0,
        }
    }
}

impl EvalCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> EvalResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`EvalCfg::load`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> EvalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(ENV_CONFIG) {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .map_err(|err| EvalError::config(format!("{path}: {err}")))?;
                Self::from_json_str(&raw)?
            }
            None => Self::default(),
        };

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            cfg.log_level = level
                .trim()
                .parse()
                .map_err(|_| EvalError::config(format!("{ENV_LOG_LEVEL}={level}")))?;
        }
        if let Some(value) = lookup(ENV_ZERO_DIVISION) {
            cfg.zero_division = value
                .trim()
                .parse()
                .map_err(|_| EvalError::config(format!("{ENV_ZERO_DIVISION}={value}")))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json_str(raw: &str) -> EvalResult<Self> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|err| EvalError::config(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> EvalResult<()> {
        if !self.zero_division.is_finite() || !(0.0..=1.0).contains(&self.zero_division) {
            return Err(EvalError::config(format!(
                "zero_division must lie in [0, 1], got {}",
                self.zero_division
            )));
        }
        Ok(())
    }
}
