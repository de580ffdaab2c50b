use crate::error::{ComposerError, Result};
use crate::layout::{Align, Direction, Padding};
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional overrides read from a `.json` or `.toml` file
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub style: Option<String>,
    pub resolve_overlaps: Option<bool>,
    pub direction: Option<Direction>,
    pub spacing: Option<f64>,
    pub padding: Option<Padding>,
    pub align: Option<Align>,
    pub columns: Option<usize>,
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| ComposerError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    let config = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content)
            .map_err(|e| ComposerError::format(format!("Invalid JSON config: {}", e)))?
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content)
            .map_err(|e| ComposerError::format(format!("Invalid TOML config: {}", e)))?
    } else {
        return Err(ComposerError::format("Config file must be .json or .toml format"));
    };

    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(
            ".toml",
            "width = 1440.0\nheight = 900.0\nstyle = \"ios\"\ndirection = \"grid\"\ncolumns = 3\n",
        );
        let config = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.width, Some(1440.0));
        assert_eq!(config.style.as_deref(), Some("ios"));
        assert_eq!(config.direction, Some(Direction::Grid));
        assert_eq!(config.columns, Some(3));
        assert_eq!(config.padding, None);
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"{"resolve_overlaps": true, "padding": {"top": 8, "right": 16, "bottom": 8, "left": 16}, "align": "center"}"#,
        );
        let config = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.resolve_overlaps, Some(true));
        assert_eq!(config.align, Some(Align::Center));
        assert_eq!(config.padding.map(|p| p.insets().left), Some(16.0));
    }

    #[test]
    fn test_rejects_unknown_extension_and_bad_content() {
        let yaml = write_temp(".yaml", "width: 10");
        assert!(matches!(
            load(yaml.path().to_str().unwrap()),
            Err(ComposerError::InvalidFormat { .. })
        ));

        let broken = write_temp(".json", "{ not json");
        assert!(load(broken.path().to_str().unwrap()).is_err());

        let unknown = write_temp(".toml", "width = 393.0\noutput_directory = \"out\"\n");
        assert!(matches!(
            load(unknown.path().to_str().unwrap()),
            Err(ComposerError::InvalidFormat { .. })
        ));

        assert!(matches!(
            load("/definitely/missing/mockc.toml"),
            Err(ComposerError::FileNotFound { .. })
        ));
    }
}
