//! Implementation of the `scandojo reset` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::FileProgressStore;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Progress;
use crate::domain::ports::ProgressStore;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ResetOutput {
    pub success: bool,
    pub message: String,
    pub progress_path: PathBuf,
}

impl CommandOutput for ResetOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ResetArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let progress_path = config.storage.progress_path.clone();

    if !args.yes && !confirm(&progress_path)? {
        let output_data = ResetOutput {
            success: false,
            message: "Reset cancelled.".to_string(),
            progress_path,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    let store = Arc::new(FileProgressStore::new(progress_path.clone()));
    store
        .save(&Progress::default())
        .await
        .context("Failed to write fresh progress")?;

    let output_data = ResetOutput {
        success: true,
        message: "Progress reset. You are back to Level 1 with 0 XP.".to_string(),
        progress_path,
    };
    output(&output_data, json_mode);
    Ok(())
}

/// Ask for confirmation on stdin. Defaults to no.
fn confirm(progress_path: &std::path::Path) -> Result<bool> {
    print!(
        "{} erase all saved progress in {}? [y/N] ",
        style("This will").yellow(),
        progress_path.display()
    );
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
