//! Session configuration

use serde::{Deserialize, Serialize};

use super::constants::bloch_constants::{DISPLAY_PRECISION, NORM_TOLERANCE};
use super::error::BlochError;

/// Tunables for a [`Session`](crate::session::Session).
///
/// Every field has a default, so a TOML document only needs to name the
/// values it changes:
///
/// ```
/// # use blochwalk::SessionConfig;
/// let config = SessionConfig::from_toml_str("display_precision = 5").unwrap();
/// assert_eq!(config.display_precision, 5);
/// assert_eq!(config.renormalize_every, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Tolerance for [`Session::validate`](crate::session::Session::validate)
    /// and the drift above which replay logs a renormalization.
    ///
    /// Default: 1e-9
    pub tolerance: f64,

    /// Replay renormalizes the state after this many gates (and always once
    /// at the end of the log). Must be at least 1.
    ///
    /// Default: 1
    pub renormalize_every: usize,

    /// Decimal digits kept when rounding amplitudes, probabilities and the
    /// distance for display. At most 15.
    ///
    /// Default: 3
    pub display_precision: usize,

    /// Seed for measurement sampling.
    ///
    /// Default: 161
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tolerance: NORM_TOLERANCE,
            renormalize_every: 1,
            display_precision: DISPLAY_PRECISION,
            seed: 161,
        }
    }
}

impl SessionConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, BlochError> {
        let config: SessionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), BlochError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(BlochError::InvalidConfig {
                message: format!("tolerance must be a positive finite number, got {}", self.tolerance),
            });
        }
        if self.renormalize_every == 0 {
            return Err(BlochError::InvalidConfig {
                message: "renormalize_every must be at least 1".to_string(),
            });
        }
        if self.display_precision > 15 {
            return Err(BlochError::InvalidConfig {
                message: format!("display_precision must be at most 15, got {}", self.display_precision),
            });
        }
        Ok(())
    }
}
