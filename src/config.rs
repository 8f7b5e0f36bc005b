//! Generation budget
//!
//! The generator keeps growing a program tree while [`Config::admits`] holds for
//! the tree's complexity and depth. Values come from [`Config::default`] and can
//! be overridden from the environment:
//!
//! - `JTIR_COMPLEXITY_LIMIT`: upper bound on the estimated cost of a tree
//! - `JTIR_MAX_DEPTH`: upper bound on nesting depth
//! - `JTIR_ITERATION_LIMIT`: iteration bound assumed for synthesized loops

use crate::error::{Error, Result};

pub const COMPLEXITY_LIMIT_VAR: &str = "JTIR_COMPLEXITY_LIMIT";
pub const MAX_DEPTH_VAR: &str = "JTIR_MAX_DEPTH";
pub const ITERATION_LIMIT_VAR: &str = "JTIR_ITERATION_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub complexity_limit: u64,
    pub max_depth: usize,
    pub iteration_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            complexity_limit: 10_000_000,
            max_depth: 3,
            iteration_limit: 1_000,
        }
    }
}

impl Config {
    /// Defaults overridden by any `JTIR_*` variables present in the environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(COMPLEXITY_LIMIT_VAR) {
            config.complexity_limit = parse_var(COMPLEXITY_LIMIT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            config.max_depth = parse_var(MAX_DEPTH_VAR, &raw)?;
        }
        if let Some(raw) = lookup(ITERATION_LIMIT_VAR) {
            config.iteration_limit = parse_var(ITERATION_LIMIT_VAR, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.complexity_limit == 0 {
            return Err(Error::config("complexity limit must be positive"));
        }
        if self.iteration_limit == 0 {
            return Err(Error::config("iteration limit must be positive"));
        }
        Ok(())
    }

    /// Whether a tree of the given cost and depth still fits the budget
    pub fn admits(&self, complexity: u64, depth: usize) -> bool {
        complexity <= self.complexity_limit && depth <= self.max_depth
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::config(format!("{} has invalid value '{}'", key, raw)))
}
