//! Mission domain model.
//!
//! A mission is one AI-generated training scenario: a narrative objective,
//! a fictional target, and the difficulty/topic it was generated for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a mission, derived from the player level and echoed
/// back verbatim by the generation service.
///
/// Serialized with capitalized labels (`"Easy"`, `"Hard"`, ...) because that
/// is the exact vocabulary the generation contract uses; a response carrying
/// any other label fails the strict parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Levels 1-2.
    Easy,
    /// Level 3.
    Medium,
    /// Level 4.
    Hard,
    /// Level 5.
    Expert,
}

impl Difficulty {
    /// Maps a player level to the difficulty of generated missions.
    pub const fn for_level(level: u8) -> Self {
        match level {
            0..=2 => Self::Easy,
            3 => Self::Medium,
            4 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// The exact label used in prompts and model responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One training scenario, immutable once created.
///
/// Produced by the mission generator from a strict JSON response and owned
/// by the session for the duration of one mission; replaced wholesale on the
/// next new-mission trigger, never partially mutated.
///
/// All fields are required at parse time; unknown extra keys in the model
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Short operation name, display only.
    pub title: String,
    /// Scenario narrative describing what the player must achieve.
    pub description: String,
    /// Fictional target address. The generation prompt constrains it to
    /// private IPv4 ranges, or documentation/link-local IPv6 ranges for
    /// IPv6-flavored topics; it is not re-validated locally.
    pub target_ip: String,
    /// Difficulty the mission was generated for, echoed by the model.
    pub difficulty: Difficulty,
    /// Topic catalog label the mission was generated for, echoed by the model.
    pub topic_category: String,
}
