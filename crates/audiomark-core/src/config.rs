//! Configuration parameters for watermark localization
//!
//! Defaults match the production batch pipeline: voices are decoded at
//! 8 kHz mono and the two best candidate positions are reported per window.

use crate::error::LocateError;
use serde::{Deserialize, Serialize};

/// Locator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Working sample rate; audio sources must deliver buffers at this rate
    pub sample_rate: u32,
    /// Number of candidate start times extracted per watermark
    pub top_k: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 8000,
            top_k: 2,
        }
    }
}

impl LocatorConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), LocateError> {
        if self.sample_rate == 0 {
            return Err(LocateError::InvalidConfig(
                "sample_rate must be > 0".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(LocateError::InvalidConfig("top_k must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LocatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_rate, 8000);
        assert_eq!(config.top_k, 2);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = LocatorConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LocateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let config = LocatorConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
