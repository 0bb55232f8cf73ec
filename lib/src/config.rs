use crate::token::{TokenEncoding, TokenLayout};

/// Configuration for row transcoding
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeConfig {
    /// Horizontal upscaling
    pub scale: f64,               // 0.1-16.0, default 1.5

    /// Tokens
    pub layout: TokenLayout,      // default Rrg
    pub encoding: TokenEncoding,  // default Escaped

    /// Run detection
    pub alpha_splits_runs: bool,  // default false
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            // Horizontal upscaling
            scale: 1.5,

            // Tokens
            layout: TokenLayout::Rrg,
            encoding: TokenEncoding::Escaped,

            // Run detection
            alpha_splits_runs: false,
        }
    }
}

impl TranscodeConfig {
    pub const MIN_SCALE: f64 = 0.1;
    pub const MAX_SCALE: f64 = 16.0;

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() {
            return Err(format!("scale must be a finite number, got {}", self.scale));
        }
        if self.scale < Self::MIN_SCALE || self.scale > Self::MAX_SCALE {
            return Err(format!(
                "scale must be between {} and {}, got {}",
                Self::MIN_SCALE,
                Self::MAX_SCALE,
                self.scale
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranscodeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scale, 1.5);
        assert_eq!(config.layout, TokenLayout::Rrg);
        assert_eq!(config.encoding, TokenEncoding::Escaped);
        assert!(!config.alpha_splits_runs);
    }

    #[test]
    fn test_invalid_scale() {
        let mut config = TranscodeConfig::default();
        config.scale = 0.0;
        assert!(config.validate().is_err());

        config.scale = 16.5;
        assert!(config.validate().is_err());

        config.scale = f64::NAN;
        assert!(config.validate().is_err());

        config.scale = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scale_bounds_are_inclusive() {
        let mut config = TranscodeConfig::default();
        config.scale = TranscodeConfig::MIN_SCALE;
        assert!(config.validate().is_ok());

        config.scale = TranscodeConfig::MAX_SCALE;
        assert!(config.validate().is_ok());
    }
}
