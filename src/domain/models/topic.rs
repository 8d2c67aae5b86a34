//! Topic catalog and rotation.
//!
//! Missions rotate through a fixed, ordered catalog. Levels 1-3 draw from
//! the fundamental topics only; level 4 unlocks the advanced list, which is
//! appended after the fundamentals in catalog order.

/// Topics available from level 1.
pub const FUNDAMENTAL_TOPICS: [&str; 7] = [
    "Host Discovery",
    "Port Scanning",
    "Service/OS Detection",
    "Timing/Performance",
    "Evasion",
    "Output",
    "Scripting",
];

/// Topics appended to the rotation at level 4 and above.
pub const ADVANCED_TOPICS: [&str; 5] = [
    "Firewall/IDS Bypass Advanced",
    "IPv6 Scanning",
    "NSE Script Categories",
    "Aggressive & Combo Scanning",
    "Protocol-Specific Enumeration",
];

/// Highest level at which only fundamental topics are in rotation.
pub const FUNDAMENTALS_MAX_LEVEL: u8 = 3;

/// The topic list in rotation for a given level.
pub fn active_topics(level: u8) -> Vec<&'static str> {
    if level <= FUNDAMENTALS_MAX_LEVEL {
        FUNDAMENTAL_TOPICS.to_vec()
    } else {
        FUNDAMENTAL_TOPICS
            .iter()
            .chain(ADVANCED_TOPICS.iter())
            .copied()
            .collect()
    }
}

/// Advances the topic cursor and returns the next topic.
///
/// The cursor moves `(last_index + 1) mod len` over whichever list is active
/// for `level`. When leveling past the fundamentals boundary the cursor is
/// deliberately NOT reset; it keeps counting modulo the larger list, which
/// can skip ahead in perceived order. That jump is accepted behavior.
pub fn next_topic(level: u8, last_index: i64) -> (&'static str, i64) {
    let topics = active_topics(level);
    let len = topics.len() as i64;
    let index = (last_index + 1).rem_euclid(len);
    (topics[usize::try_from(index).unwrap_or(0)], index)
}
