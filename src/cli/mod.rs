//! CLI module for the Wolf Dynasty API

pub mod serve;

use clap::{Parser, Subcommand};

/// Wolf Dynasty API - fantasy football dynasty team service
#[derive(Parser)]
#[command(name = "wolf-dynasty-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
