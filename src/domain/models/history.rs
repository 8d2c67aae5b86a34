//! Bounded command history with sequential recall.

use std::collections::VecDeque;

/// Maximum number of remembered commands.
pub const MAX_COMMAND_HISTORY: usize = 10;

/// Ordered history of submitted inputs, oldest first.
///
/// Capacity-bounded: the oldest entry is evicted on overflow. An input
/// textually identical to the immediately preceding entry is not appended.
/// The recall cursor walks entries most-recent-first and resets past the end
/// on every push; it has no bearing on validation logic. History persists
/// across missions within a process and is never saved to disk.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    /// Recall position; `entries.len()` means "past the end" (nothing
    /// recalled, input line empty).
    cursor: usize,
}

impl CommandHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one input line, applying the dedupe and capacity rules, and
    /// resets the recall cursor.
    pub fn push(&mut self, command: &str) {
        if self.entries.back().map(String::as_str) != Some(command) {
            self.entries.push_back(command.to_string());
            if self.entries.len() > MAX_COMMAND_HISTORY {
                self.entries.pop_front();
            }
        }
        self.cursor = self.entries.len();
    }

    /// Steps the cursor toward older entries; `None` when already at the
    /// oldest entry (caller keeps what it is showing).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            None
        }
    }

    /// Steps the cursor toward newer entries; `None` once past the newest
    /// entry (caller clears its input line).
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of remembered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(history: &CommandHistory) -> Vec<String> {
        history.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_push_and_order() {
        let mut history = CommandHistory::new();
        history.push("nmap -sn 10.0.0.0/24");
        history.push("nmap -sV 10.0.0.5");
        assert_eq!(
            collect(&history),
            vec!["nmap -sn 10.0.0.0/24", "nmap -sV 10.0.0.5"]
        );
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = CommandHistory::new();
        for i in 0..11 {
            history.push(&format!("nmap -p {i} 10.0.0.1"));
        }
        assert_eq!(history.len(), MAX_COMMAND_HISTORY);
        let entries = collect(&history);
        assert_eq!(entries.first().map(String::as_str), Some("nmap -p 1 10.0.0.1"));
        assert_eq!(entries.last().map(String::as_str), Some("nmap -p 10 10.0.0.1"));
    }

    #[test]
    fn test_consecutive_duplicate_not_appended() {
        let mut history = CommandHistory::new();
        history.push("nmap -A 192.168.1.1");
        history.push("nmap -A 192.168.1.1");
        assert_eq!(history.len(), 1);
        // A non-consecutive repeat is recorded.
        history.push("help");
        history.push("nmap -A 192.168.1.1");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_recall_walks_newest_to_oldest() {
        let mut history = CommandHistory::new();
        history.push("first");
        history.push("second");
        history.push("third");
        assert_eq!(history.recall_previous(), Some("third"));
        assert_eq!(history.recall_previous(), Some("second"));
        assert_eq!(history.recall_previous(), Some("first"));
        // At the oldest entry the cursor stays put.
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), Some("second"));
        assert_eq!(history.recall_next(), Some("third"));
        // Stepping past the newest clears the line.
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.recall_previous(), Some("third"));
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = CommandHistory::new();
        history.push("first");
        history.push("second");
        assert_eq!(history.recall_previous(), Some("second"));
        assert_eq!(history.recall_previous(), Some("first"));
        history.push("third");
        assert_eq!(history.recall_previous(), Some("third"));
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = CommandHistory::new();
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), None);
    }
}
