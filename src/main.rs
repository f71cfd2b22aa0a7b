//! Contact Bot - Main entry point
//!
//! Runs the interactive contact assistant on stdin/stdout.

use anyhow::Result;
use contact_bot::{run_bot, AddressBook, Config, ContactBot, ContactServiceImpl};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries nothing but bot output)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(name_policy = ?config.name_policy, "Configuration loaded successfully");

    let service = ContactServiceImpl::new(AddressBook::new(), config.name_policy);
    let mut bot = ContactBot::new(service);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_bot(&mut bot, stdin.lock(), stdout.lock()) {
        error!("Contact bot stopped: {:#}", e);
        return Err(e);
    }

    info!("Contact bot shutdown complete");
    Ok(())
}
