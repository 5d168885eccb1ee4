//! # HomeHub — smart-home device scheduler
//!
//! Usage:
//!   homehub                          # Seed the sample home and run the scheduler
//!   homehub list                     # Show schedules with their recurrence
//!   homehub devices                  # Show devices and their state
//!   homehub init-config              # Write ~/.homehub/config.toml
//!   homehub --config ./home.toml -v  # Custom config, debug logging

mod demo;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use homehub_core::HomeHubConfig;
use homehub_scheduler::spawn_scheduler;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "homehub", version, about = "🏠 HomeHub — smart-home device scheduler")]
struct Cli {
    /// Config file (default: ~/.homehub/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scheduler loop until Ctrl-C
    Run,
    /// List schedules
    List,
    /// List devices
    Devices,
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn expand_path(p: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(p).to_string())
}

fn init_logging(config: &HomeHubConfig, verbose: bool) {
    let filter = if verbose {
        "homehub=debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }
}

/// Load the config at `path`, or the default location when unset. A missing
/// explicit path falls back to defaults and is returned so it can be reported.
fn load_config(path: Option<&Path>) -> Result<(HomeHubConfig, Option<&Path>)> {
    match path {
        Some(p) if p.exists() => Ok((HomeHubConfig::load_from(p)?, None)),
        Some(p) => Ok((HomeHubConfig::default(), Some(p))),
        None => Ok((HomeHubConfig::load()?, None)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref().map(expand_path);
    let (config, missing) = load_config(config_path.as_deref())?;

    init_logging(&config, cli.verbose);
    let writing_config = matches!(cli.command, Some(Command::InitConfig { .. }));
    if let Some(path) = missing.filter(|_| !writing_config) {
        tracing::warn!("⚠️ Config file {} not found; using defaults", path.display());
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::InitConfig { force } => {
            let path = config_path.unwrap_or_else(HomeHubConfig::default_path);
            if path.exists() && !force {
                println!("⚠️  Config already exists at {} (use --force)", path.display());
            } else {
                config.save_to(&path)?;
                println!("✅ Config written to {}", path.display());
            }
        }
        Command::List => {
            let (_, engine) = demo::build_home(&config)?;
            println!("📅 {} — {} schedules\n", config.home_name, engine.schedule_count());
            for s in engine.store().list() {
                println!(
                    "{:>8}  {:<18} → {:<16} [{}] {}{}",
                    s.formatted_time(),
                    s.name,
                    s.device_name,
                    s.repeat_description(),
                    s.action.summary(),
                    if s.is_enabled { "" } else { " (disabled)" }
                );
            }
        }
        Command::Devices => {
            let (registry, _) = demo::build_home(&config)?;
            println!("🏠 {} — {} devices, {} on\n", config.home_name, registry.len(), registry.active_count());
            for d in registry.list() {
                println!(
                    "{} {:<16} {:<12} {:<14} {}",
                    if d.is_on { "●" } else { "○" },
                    d.name,
                    d.device_type.to_string(),
                    d.room.as_deref().unwrap_or("-"),
                    d.status
                );
            }
        }
        Command::Run => {
            let (registry, engine) = demo::build_home(&config)?;
            tracing::info!(
                "🏠 {}: {} devices, {} schedules",
                config.home_name,
                registry.len(),
                engine.schedule_count()
            );
            let engine = Arc::new(Mutex::new(engine));
            let registry = Arc::new(Mutex::new(registry));

            if config.scheduler.enabled {
                tokio::spawn(spawn_scheduler(
                    engine.clone(),
                    registry.clone(),
                    config.scheduler.check_interval_secs,
                ));
            } else {
                tracing::info!("⏸️ Scheduler disabled — schedules are stored but never fire");
            }

            tokio::signal::ctrl_c().await?;
            let eng = engine.lock().await;
            tracing::info!("👋 Shutting down after {} firings", eng.history().len());
        }
    }

    Ok(())
}
