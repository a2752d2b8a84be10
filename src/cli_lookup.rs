use anyhow::{Context, Result};
use clap::Parser;
use songdex::catalog::load_catalog;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_csv_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the songs CSV file.
    #[clap(value_parser = parse_csv_path)]
    pub path: PathBuf,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    println!(
        "Cli Lookup loading songs at {}...",
        cli_args.path.display()
    );
    let catalog = load_catalog(&cli_args.path)?;
    println!("Done! {} songs loaded.", catalog.get_songs_count());

    loop {
        println!("Please enter a song id (empty line to quit):");

        let mut user_input = String::new();
        io::stdin()
            .read_line(&mut user_input)
            .with_context(|| "Failed to read line")?;
        let user_input = user_input.trim();

        if user_input.is_empty() {
            break;
        }

        match catalog.get_song(user_input) {
            Some(song) => println!("Song found:\n{}", song),
            None => println!("Song with id \"{}\" not found.", user_input),
        }
        println!();
    }

    Ok(())
}
