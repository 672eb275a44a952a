//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `soc_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use soc_status::initialization::init_logger_with;
use soc_status::{render_overview, run_dashboard, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting RUST_LOG in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the dashboard using the library
    match run_dashboard(config).await {
        Ok(report) => {
            // Show what the dashboard held at shutdown
            println!(
                "{}",
                render_overview(&report.identity, &report.top_ips, &report.routes)
            );
            // Print user-friendly summary
            println!(
                "✅ Dispatched {} poll{} ({} applied, {} failed) in {:.1}s",
                report.polls_attempted,
                if report.polls_attempted == 1 { "" } else { "s" },
                report.polls_applied,
                report.polls_failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("soc_status error: {:#}", e);
            process::exit(1);
        }
    }
}
