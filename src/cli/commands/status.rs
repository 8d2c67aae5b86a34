//! Implementation of the `scandojo status` command.

use anyhow::Result;
use comfy_table::{presets, Cell, ContentArrangement, Table};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::FileProgressStore;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Progress, MAX_LEVEL};
use crate::domain::ports::ProgressStore;
use crate::infrastructure::config::ConfigLoader;

#[derive(Debug, serde::Serialize)]
pub struct StatusOutput {
    pub level: u8,
    pub xp: u64,
    pub xp_to_next_level: Option<u64>,
    pub missions_completed: u64,
    pub advanced_unlocked: bool,
    pub progress_path: PathBuf,
}

impl StatusOutput {
    fn from_progress(progress: &Progress, progress_path: PathBuf) -> Self {
        Self {
            level: progress.level,
            xp: progress.xp,
            xp_to_next_level: progress.xp_to_next_level(),
            missions_completed: progress.missions_completed,
            advanced_unlocked: progress.advanced_unlocked(),
            progress_path,
        }
    }
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.add_row(vec![
            Cell::new("Level"),
            Cell::new(format!("{}/{}", self.level, MAX_LEVEL)),
        ]);
        table.add_row(vec![Cell::new("XP"), Cell::new(self.xp)]);
        match self.xp_to_next_level {
            Some(remaining) => {
                table.add_row(vec![Cell::new("XP to next level"), Cell::new(remaining)]);
            }
            None => {
                table.add_row(vec![Cell::new("XP to next level"), Cell::new("max level")]);
            }
        }
        table.add_row(vec![
            Cell::new("Missions completed"),
            Cell::new(self.missions_completed),
        ]);
        table.add_row(vec![
            Cell::new("Advanced topics"),
            Cell::new(if self.advanced_unlocked {
                "unlocked"
            } else {
                "locked (reach Level 4)"
            }),
        ]);
        table.add_row(vec![
            Cell::new("Progress file"),
            Cell::new(self.progress_path.display()),
        ]);

        format!("Training progress:\n{table}")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let store = Arc::new(FileProgressStore::new(config.storage.progress_path.clone()));
    let progress = store.load().await;

    let output_data = StatusOutput::from_progress(&progress, config.storage.progress_path);
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_progress_renders_locked() {
        let output_data = StatusOutput::from_progress(
            &Progress::default(),
            PathBuf::from(".scandojo/progress.json"),
        );
        assert_eq!(output_data.level, 1);
        assert_eq!(output_data.xp_to_next_level, Some(300));
        let human = output_data.to_human();
        assert!(human.contains("locked (reach Level 4)"));
    }

    #[test]
    fn test_max_level_renders_without_next_threshold() {
        let progress = Progress {
            xp: 2450,
            level: 5,
            last_topic_index: 9,
            missions_completed: 31,
        };
        let output_data =
            StatusOutput::from_progress(&progress, PathBuf::from(".scandojo/progress.json"));
        assert_eq!(output_data.xp_to_next_level, None);
        assert!(output_data.advanced_unlocked);
        assert!(output_data.to_human().contains("max level"));
    }

    #[test]
    fn test_json_output_shape() {
        let output_data = StatusOutput::from_progress(
            &Progress::default(),
            PathBuf::from(".scandojo/progress.json"),
        );
        let json = output_data.to_json();
        assert_eq!(json["level"], 1);
        assert_eq!(json["xp"], 0);
        assert_eq!(json["missions_completed"], 0);
        assert_eq!(json["advanced_unlocked"], false);
    }
}
