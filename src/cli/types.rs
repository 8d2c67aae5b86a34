//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::init::InitArgs;
use crate::cli::commands::reset::ResetArgs;

#[derive(Parser)]
#[command(name = "scandojo")]
#[command(about = "Scan Dojo - AI-powered nmap training", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Raise the log level to debug
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Scan Dojo configuration in the current directory
    Init(InitArgs),

    /// Start an interactive training session
    Play,

    /// Show saved progress
    Status,

    /// Reset saved progress to a fresh record
    Reset(ResetArgs),
}
