use serde::{Deserialize, Serialize};

use crate::error::ScanError;

pub const DEFAULT_MAX_DEPTH: usize = 128;
pub const DEFAULT_MAX_PATH_ELEMENTS: usize = 65_536;

/// Resource limits applied while lexing literals.
///
/// Loadable from TOML; missing keys fall back to their defaults:
///
/// ```toml
/// max_depth = 64
/// max_path_elements = 1024
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum bracket nesting accepted inside a property value.
    pub max_depth: usize,
    /// Maximum number of elements (vertices plus edges) accepted in one path.
    pub max_path_elements: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            max_path_elements: DEFAULT_MAX_PATH_ELEMENTS,
        }
    }
}

impl ScanConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ScanError> {
        let config: ScanConfig = toml::from_str(content)?;
        if config.max_depth == 0 {
            return Err(ScanError::Config(
                "max_depth must allow at least one nesting level".to_string(),
            ));
        }
        tracing::debug!("Loaded scan config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ScanConfig::from_toml_str("max_depth = 4").unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.max_path_elements, DEFAULT_MAX_PATH_ELEMENTS);
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(matches!(
            ScanConfig::from_toml_str("max_depth = 0"),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        assert!(matches!(
            ScanConfig::from_toml_str("max_depth = \"deep\""),
            Err(ScanError::Config(_))
        ));
    }
}
