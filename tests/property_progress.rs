use proptest::prelude::*;
use scandojo::domain::models::topic::{active_topics, next_topic};
use scandojo::domain::models::{CommandHistory, Progress, MAX_COMMAND_HISTORY};
use std::collections::HashSet;

proptest! {
    /// Property: XP awards never lower the level
    ///
    /// After any sequence of awards the stored level matches the threshold
    /// table, and a promotion is reported exactly when the level changed.
    #[test]
    fn prop_add_xp_is_monotonic(
        start_xp in 0u64..5_000,
        gains in proptest::collection::vec(1u64..200, 1..20)
    ) {
        let mut progress = Progress {
            xp: start_xp,
            level: Progress::level_for(start_xp),
            ..Progress::default()
        };
        let mut last_level = progress.level;

        for gain in gains {
            let promotion = progress.add_xp(gain);
            prop_assert!(progress.level >= last_level);
            prop_assert_eq!(progress.level, Progress::level_for(progress.xp));
            match promotion {
                Some(step) => {
                    prop_assert_eq!(step.from, last_level);
                    prop_assert_eq!(step.to, progress.level);
                    prop_assert!(step.to > step.from);
                }
                None => prop_assert_eq!(progress.level, last_level),
            }
            last_level = progress.level;
        }
    }

    /// Property: The computed level is always in [1, 5]
    #[test]
    fn prop_level_always_in_range(xp in 0u64..u64::MAX / 2) {
        let level = Progress::level_for(xp);
        prop_assert!((1..=5).contains(&level));
    }

    /// Property: Paying exactly the remaining XP reaches the next level
    #[test]
    fn prop_xp_to_next_reaches_next_level(xp in 0u64..2_500) {
        let mut progress = Progress {
            xp,
            level: Progress::level_for(xp),
            ..Progress::default()
        };
        match progress.xp_to_next_level() {
            Some(remaining) => {
                let before = progress.level;
                progress.add_xp(remaining);
                prop_assert_eq!(progress.level, before + 1);
            }
            None => prop_assert_eq!(progress.level, 5),
        }
    }

    /// Property: Rotation always yields an in-bounds cursor and a topic
    /// from the list active at that level
    #[test]
    fn prop_rotation_index_in_bounds(level in 1u8..=5, last_index in -1i64..100) {
        let (topic, index) = next_topic(level, last_index);
        let topics = active_topics(level);
        let len = topics.len() as i64;
        prop_assert!((0..len).contains(&index));
        prop_assert_eq!(topic, topics[usize::try_from(index).unwrap()]);
    }

    /// Property: One full cycle at a fixed level visits every active topic
    /// exactly once
    #[test]
    fn prop_rotation_cycles_without_repeats(level in 1u8..=5, start in -1i64..12) {
        let topics = active_topics(level);
        let mut cursor = start;
        let mut seen = HashSet::new();

        for _ in 0..topics.len() {
            let (topic, next) = next_topic(level, cursor);
            prop_assert!(
                seen.insert(topic),
                "topic repeated before the cycle closed: {}",
                topic
            );
            cursor = next;
        }
        prop_assert_eq!(seen.len(), topics.len());
    }

    /// Property: History never exceeds its capacity, keeps insertion order,
    /// and stores no consecutive duplicates
    #[test]
    fn prop_history_discipline(
        commands in proptest::collection::vec("[a-z]{1,8}", 1..40)
    ) {
        let mut history = CommandHistory::new();
        for command in &commands {
            history.push(command);
        }

        prop_assert!(history.len() <= MAX_COMMAND_HISTORY);
        let stored: Vec<&str> = history.iter().collect();
        for pair in stored.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
        // The newest stored entry is always the last pushed command.
        prop_assert_eq!(stored.last().copied(), commands.last().map(String::as_str));
    }

    /// Property: Recall walks back at most len entries and then parks at
    /// the oldest one
    #[test]
    fn prop_recall_is_bounded(
        commands in proptest::collection::vec("[a-z]{1,6}", 0..15)
    ) {
        let mut history = CommandHistory::new();
        for command in &commands {
            history.push(command);
        }

        let len = history.len();
        let mut recalled = 0usize;
        while history.recall_previous().is_some() {
            recalled += 1;
            prop_assert!(recalled <= len);
        }
        prop_assert_eq!(recalled, len);
    }
}
