mod file_config;

pub use file_config::FileConfig;

use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub csv_path: Option<PathBuf>,
    pub lookup_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub csv_path: PathBuf,
    pub lookup_id: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let csv_path = file
            .csv_path
            .map(PathBuf::from)
            .or_else(|| cli.csv_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("csv_path must be specified as an argument or in a config file")
            })?;

        let lookup_id = cli
            .lookup_id
            .clone()
            .or(file.default_lookup_id);

        Ok(AppConfig {
            csv_path,
            lookup_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_overrides_cli_path() {
        let cli = CliConfig {
            csv_path: Some(PathBuf::from("/cli/songs.csv")),
            lookup_id: None,
        };
        let file = FileConfig {
            csv_path: Some("/file/songs.csv".to_owned()),
            default_lookup_id: None,
        };
        let resolved = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(resolved.csv_path, PathBuf::from("/file/songs.csv"));
    }

    #[test]
    fn cli_lookup_id_wins_over_file_default() {
        let cli = CliConfig {
            csv_path: Some(PathBuf::from("/cli/songs.csv")),
            lookup_id: Some("from-cli".to_owned()),
        };
        let file = FileConfig {
            csv_path: None,
            default_lookup_id: Some("from-file".to_owned()),
        };
        let resolved = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(resolved.lookup_id.as_deref(), Some("from-cli"));
    }

    #[test]
    fn missing_csv_path_is_an_error() {
        let resolved = AppConfig::resolve(&CliConfig::default(), None);
        assert!(resolved.is_err());
    }
}
