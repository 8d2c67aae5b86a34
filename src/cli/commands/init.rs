//! Implementation of the `scandojo init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::output::{output, CommandOutput};

/// Configuration template written by `init`. Values mirror the defaults, so
/// a fresh file changes nothing until the player edits it.
const CONFIG_TEMPLATE: &str = "\
# Scan Dojo configuration.
# Values here are overridden by .scandojo/local.yaml and by
# SCANDOJO_* environment variables (e.g. SCANDOJO_GATEWAY__MODEL).
gateway:
  # Gemini API key. Leave unset to use the GEMINI_API_KEY environment variable.
  # api_key: your-key-here
  model: gemini-2.5-flash
  timeout_secs: 60
storage:
  progress_path: .scandojo/progress.json
logging:
  level: info
  dir: .scandojo/logs
";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub directories_created: Vec<String>,
    pub config_written: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if !self.directories_created.is_empty() {
            lines.push("\nCreated directories:".to_string());
            for dir in &self.directories_created {
                lines.push(format!("  - {dir}"));
            }
        }
        if self.config_written {
            lines.push("\nConfiguration written to .scandojo/config.yaml".to_string());
            lines.push("Set your Gemini API key there or export GEMINI_API_KEY.".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let dojo_dir = PathBuf::from(".scandojo");
    let config_path = dojo_dir.join("config.yaml");

    if config_path.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Already initialized. Use --force to overwrite the configuration."
                .to_string(),
            directories_created: vec![],
            config_written: false,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    let mut directories_created = vec![];
    for dir in [dojo_dir.clone(), dojo_dir.join("logs")] {
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            directories_created.push(dir.to_string_lossy().to_string());
        }
    }

    fs::write(&config_path, CONFIG_TEMPLATE)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Reinitialized successfully.".to_string()
        } else {
            "Initialized successfully.".to_string()
        },
        directories_created,
        config_written: true,
    };

    output(&output_data, json_mode);
    Ok(())
}
