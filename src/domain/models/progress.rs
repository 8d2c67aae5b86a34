//! Player progress: the only durable entity.
//!
//! XP and level move together; level is always recomputed from XP through
//! the fixed threshold table, never stored independently.

use serde::{Deserialize, Serialize};

/// Inclusive XP ranges per level. XP at or beyond the last lower bound is
/// level 5 regardless of table lookup.
const LEVEL_THRESHOLDS: [(u8, u64, u64); 5] = [
    (1, 0, 299),
    (2, 300, 699),
    (3, 700, 1199),
    (4, 1200, 1999),
    (5, 2000, u64::MAX),
];

/// Highest reachable level.
pub const MAX_LEVEL: u8 = 5;

/// A level increase observed while applying XP, surfaced to the
/// presentation layer as a one-shot notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before the award.
    pub from: u8,
    /// Level after the award.
    pub to: u8,
}

impl LevelUp {
    /// Whether this promotion crossed into the advanced-topic tier.
    pub const fn unlocks_advanced(self) -> bool {
        self.to >= 4
    }
}

/// The persistent progress record.
///
/// Loaded once at startup and saved after every completed mission. A missing
/// or unreadable store yields `Progress::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Accumulated experience points; never decreases within a session.
    pub xp: u64,
    /// Current level in [1, 5]; always equal to `level_for(xp)`.
    pub level: u8,
    /// Cursor into the active topic list; -1 before the first mission.
    pub last_topic_index: i64,
    /// Count of successfully validated missions.
    pub missions_completed: u64,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            last_topic_index: -1,
            missions_completed: 0,
        }
    }
}

impl Progress {
    /// Level for a given XP total, per the fixed threshold table.
    pub fn level_for(xp: u64) -> u8 {
        for (level, min, max) in LEVEL_THRESHOLDS {
            if xp >= min && xp <= max {
                return level;
            }
        }
        MAX_LEVEL
    }

    /// Adds XP and recomputes the level, returning the promotion if the
    /// level increased.
    pub fn add_xp(&mut self, gained: u64) -> Option<LevelUp> {
        let old_level = self.level;
        self.xp += gained;
        self.level = Self::level_for(self.xp);
        (self.level > old_level).then_some(LevelUp {
            from: old_level,
            to: self.level,
        })
    }

    /// XP still needed to reach the next level, or `None` at the cap.
    pub fn xp_to_next_level(&self) -> Option<u64> {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(level, _, _)| *level == self.level + 1)
            .map(|(_, min, _)| min.saturating_sub(self.xp))
    }

    /// Whether the advanced topic list is in rotation.
    pub const fn advanced_unlocked(&self) -> bool {
        self.level >= 4
    }
}
