//! # Station Escape - a small text adventure on a failing orbital station
//!
//! The player is a technician stranded in the maintenance tunnels of a
//! damaged station. A malfunctioning droid blocks the way to the docking bay;
//! the diagnostic tool lying nearby can reboot it. Beyond lies the energy
//! crystal that powers the escape pod.
//!
//! ## Features
//!
//! - **Plain Command Grammar**: `north`, `pick up tool`, `use tool`, `status`, `win`, with short aliases (`n`, `take`, `i`, `q`).
//! - **Arena World Model**: locations live in a single `World`; exits and the player hold indices, never references.
//! - **Scored Run**: points for each milestone, hazards for every blocked move, an optional hazard limit that ends the run.
//! - **Replaceable Copy**: every line the game prints comes from a text catalog that a JSON file can override.
//! - **Async Console**: the game loop runs on Tokio over any buffered reader and writer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use station_escape::config::Config;
//! use station_escape::game::{run_console, ConsoleOptions, GameSession, TextCatalog};
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut session = GameSession::orbital_station(config.rules, Box::new(TextCatalog::new()));
//!
//!     let mut stdout = tokio::io::stdout();
//!     let summary = run_console(
//!         &mut session,
//!         BufReader::new(tokio::io::stdin()),
//!         &mut stdout,
//!         &ConsoleOptions::default(),
//!     )
//!     .await?;
//!     println!("final score {}", summary.score);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world model, player rules, command interpreter and console loop
//! - [`config`] - TOML configuration
//! - [`logutil`] - helpers for logging raw player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Console Loop   │ ← reads lines, writes replies
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  GameSession    │ ← parse, validate, mutate
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ World + Player  │ ← arena of locations, player state
//! └─────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod logutil;
