//! Configuration loading and validation for the batch crypter.
//!
//! Values are read from environment variables. An unset worker ceiling is
//! valid: each batch then falls back to the machine's available
//! parallelism at encryption time.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated crypter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrypterConfig {
    /// Upper bound on concurrently running encryption workers. When unset,
    /// each batch resolves it from `std::thread::available_parallelism()`.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl CrypterConfig {
    /// Load and validate configuration from environment variables.
    ///
    /// Recognised variable: `WORKERS` — the worker ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails
    /// validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: CrypterConfig = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first
    /// failure.
    fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            anyhow::bail!("WORKERS must be > 0 when set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unset_ceiling() {
        let cfg = CrypterConfig::default();
        assert_eq!(cfg.workers, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn accepts_positive_ceiling() {
        let cfg = CrypterConfig { workers: Some(8) };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_ceiling() {
        let cfg = CrypterConfig { workers: Some(0) };
        assert!(cfg.validate().is_err());
    }
}
