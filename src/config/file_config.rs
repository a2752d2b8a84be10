use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Path to the songs CSV file.
    pub csv_path: Option<String>,
    /// Song id to look up when none is given on the command line.
    pub default_lookup_id: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let parsed: FileConfig = toml::from_str(
            "csv_path = \"/data/songs.csv\"\ndefault_lookup_id = \"song123\"\n",
        )
        .unwrap();
        assert_eq!(parsed.csv_path.as_deref(), Some("/data/songs.csv"));
        assert_eq!(parsed.default_lookup_id.as_deref(), Some("song123"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert!(parsed.csv_path.is_none());
        assert!(parsed.default_lookup_id.is_none());
    }
}
