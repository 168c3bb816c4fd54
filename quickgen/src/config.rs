//! Configuration for generators whose behaviour is not fully described by
//! their call arguments.

pub use crate::error::ConfigError;

const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum nesting of recursive generators before they stop producing values
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with validation
    pub fn new(max_depth: usize) -> Result<Self, ConfigError> {
        let config = Self { max_depth };
        config.validate()?;
        Ok(config)
    }

    /// Validate the generator configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_depth, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generator_config_validation() {
        assert_eq!(
            GeneratorConfig::new(0),
            Err(ConfigError::InvalidMaxDepth(0))
        );
        assert_eq!(GeneratorConfig::new(4).map(|c| c.max_depth), Ok(4));

        let invalid = GeneratorConfig::default().with_max_depth(0);
        assert!(invalid.validate().is_err());
    }
}
