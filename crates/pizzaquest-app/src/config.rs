//! Loading `SimConfig` from a JSON file.

use std::path::Path;

use thiserror::Error;

use pizzaquest_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a config document. Missing fields take their defaults.
pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            parse_config(r#"{ "seed": "lots" }"#),
            Err(ConfigError::Json(_))
        ));
    }
}
