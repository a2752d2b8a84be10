use anyhow::{Context, Result};
use clap::Parser;
use songdex::catalog::load_catalog;
use songdex::config::{AppConfig, CliConfig, FileConfig};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the songs CSV file. May also come from the config file.
    #[clap(value_parser = parse_path)]
    pub csv_path: Option<PathBuf>,

    /// Path to an optional TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Look up a single song by id after loading.
    #[clap(long)]
    pub id: Option<String>,

    /// Print every loaded song.
    #[clap(long)]
    pub print_all: bool,

    /// Render songs as JSON instead of plain text.
    #[clap(long)]
    pub json: bool,
}

fn print_song(song: &songdex::SongRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(song)?);
    } else {
        println!("{}", song);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        csv_path: cli_args.csv_path.clone(),
        lookup_id: cli_args.id.clone(),
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Loading songs from {}...", config.csv_path.display());
    let catalog = load_catalog(&config.csv_path)?;

    if let Some(id) = &config.lookup_id {
        match catalog.get_song(id) {
            Some(song) => {
                println!("Retrieved song:");
                print_song(song, cli_args.json)?;
            }
            None => println!("Song with id \"{}\" not found.", id),
        }
    }

    if cli_args.print_all {
        for song in catalog.iter_songs() {
            print_song(song, cli_args.json)?;
        }
    }

    Ok(())
}
