//! Binary entrypoint for the Station Escape CLI.
//!
//! Commands:
//! - `play` (default) - run a game session on the terminal
//! - `init [--force]` - write a starter `config.toml`
//! - `texts [--output <file>]` - dump the effective text catalog as JSON
//! - `check` - show the configuration and text overrides that would be used
//!
//! See the library crate docs for module-level details: `station_escape::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use tokio::io::BufReader;

use station_escape::config::Config;
use station_escape::game::{run_console, ConsoleOptions, GameSession, TextCatalog};

#[derive(Parser)]
#[command(name = "station-escape")]
#[command(about = "Escape a failing orbital station: a small text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv, -vvv; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session on stdin/stdout
    Play,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective text catalog as JSON
    Texts {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate configuration and text overrides
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Init { force } = command {
        init_logging(&None, cli.verbose);
        Config::create_default(&cli.config, force).await?;
        info!("Configuration file created at {}", cli.config);
        println!("Wrote default configuration to {}", cli.config);
        return Ok(());
    }

    let (config, from_file) = Config::load_or_default(&cli.config).await?;
    init_logging(&Some(config.clone()), cli.verbose);
    if from_file {
        debug!("Loaded configuration from {}", cli.config);
    } else {
        debug!("No configuration at {}; using defaults", cli.config);
    }

    match command {
        Commands::Play => {
            let texts = build_catalog(&config)?;
            info!("Starting Station Escape v{}", env!("CARGO_PKG_VERSION"));
            let mut session = GameSession::orbital_station(config.rules.clone(), Box::new(texts))
                .with_echo_status(config.game.echo_status);
            let options = ConsoleOptions {
                prompt: config.game.prompt.clone(),
                show_banner: config.game.show_banner,
            };
            let mut stdout = tokio::io::stdout();
            run_console(
                &mut session,
                BufReader::new(tokio::io::stdin()),
                &mut stdout,
                &options,
            )
            .await?;
        }
        Commands::Texts { output } => {
            let texts = build_catalog(&config)?;
            let json = texts
                .to_json_pretty()
                .map_err(|e| anyhow!("Failed to serialize text catalog: {}", e))?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .map_err(|e| anyhow!("Failed to write {}: {}", path, e))?;
                    println!("Wrote {} text entries to {}", texts.len(), path);
                }
                None => println!("{}", json),
            }
        }
        Commands::Check => {
            let texts = build_catalog(&config)?;
            let source = if from_file {
                cli.config.as_str()
            } else {
                "built-in defaults"
            };
            println!("Configuration: {}", source);
            println!(
                "Points: tool {} | repair {} | crystal {} | win {} (max {})",
                config.rules.tool_points,
                config.rules.repair_points,
                config.rules.crystal_points,
                config.rules.win_bonus,
                config.rules.max_score()
            );
            match config.rules.hazard_limit {
                Some(limit) if limit > 0 => println!("Hazard limit: {}", limit),
                _ => println!("Hazard limit: disabled"),
            }
            println!(
                "Text overrides: {}",
                config.game.text_file.as_deref().unwrap_or("none")
            );
            println!("Text entries: {}", texts.len());
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}

/// Built-in copy with the configured JSON overrides applied on top.
fn build_catalog(config: &Config) -> Result<TextCatalog> {
    let mut texts = TextCatalog::new();
    if let Some(ref path) = config.game.text_file {
        let count = texts
            .load_overrides(path)
            .map_err(|e| anyhow!("Failed to load text overrides {}: {}", path, e))?;
        info!("Loaded {} text overrides from {}", count, path);
    }
    Ok(texts)
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Each -v raises the configured level by one step
    let configured = config
        .as_ref()
        .map(|c| c.logging.level_filter())
        .unwrap_or(log::LevelFilter::Warn);
    let base_level = match verbosity {
        0 => configured,
        1 => configured.max(log::LevelFilter::Info),
        2 => configured.max(log::LevelFilter::Debug),
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Only echo to the console when a person is watching it
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
