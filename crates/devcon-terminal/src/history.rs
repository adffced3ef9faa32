//! Input history ("clipboard") with a recall cursor.
//!
//! The buffer has a fixed number of slots. Lines are written at
//! `write_index`, which only moves forward. Writing the last slot does not
//! wrap onto the oldest entry: it clears every slot and starts again from
//! zero, and the caller is told so it can notify the operator.

/// Result of [`HistoryBuffer::store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The line was kept.
    Stored,
    /// The line filled the last slot and the whole buffer was cleared.
    Cleared,
    /// Capacity is zero; nothing happened.
    Disabled,
}

/// Fixed-capacity history of submitted lines.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    write_index: usize,
    cursor: usize,
}

impl HistoryBuffer {
    /// Create a buffer with `capacity` slots. Zero disables history.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![String::new(); capacity],
            write_index: 0,
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn is_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Next slot to be written.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Current recall position, `0..=write_index`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All slots, including unwritten (empty) ones.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Lines written since the last reset, oldest first.
    pub fn stored(&self) -> &[String] {
        &self.entries[..self.write_index]
    }

    /// Record a submitted line.
    pub fn store(&mut self, line: &str) -> StoreOutcome {
        let capacity = self.entries.len();
        if capacity == 0 {
            return StoreOutcome::Disabled;
        }

        self.entries[self.write_index] = line.to_string();
        if self.write_index < capacity - 1 {
            self.write_index += 1;
            self.cursor = self.write_index;
            StoreOutcome::Stored
        } else {
            log::debug!("History full at {capacity} entries, clearing");
            self.entries.iter_mut().for_each(String::clear);
            self.write_index = 0;
            self.cursor = 0;
            StoreOutcome::Cleared
        }
    }

    /// Step back to an older line.
    ///
    /// Stays on the oldest line once reached. Returns `None` when there is
    /// nothing stored.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.write_index == 0 {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(&self.entries[self.cursor])
    }

    /// Step forward to a newer line.
    ///
    /// Stepping past the newest stored line yields the empty next slot.
    /// Returns `None` when there is nothing stored or the cursor is already
    /// at `write_index`.
    pub fn recall_newer(&mut self) -> Option<&str> {
        if self.write_index == 0 || self.cursor >= self.write_index {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled(capacity: usize, lines: &[&str]) -> HistoryBuffer {
        let mut h = HistoryBuffer::new(capacity);
        for line in lines {
            h.store(line);
        }
        h
    }

    #[test]
    fn new_is_empty() {
        let h = HistoryBuffer::new(5);
        assert_eq!(h.capacity(), 5);
        assert!(h.is_enabled());
        assert_eq!(h.write_index(), 0);
        assert_eq!(h.cursor(), 0);
        assert!(h.stored().is_empty());
    }

    #[test]
    fn store_advances_index_and_cursor() {
        let mut h = HistoryBuffer::new(5);
        assert_eq!(h.store("a"), StoreOutcome::Stored);
        assert_eq!(h.store("b"), StoreOutcome::Stored);
        assert_eq!(h.write_index(), 2);
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.stored(), ["a", "b"]);
    }

    #[test]
    fn filling_last_slot_clears_everything() {
        let mut h = HistoryBuffer::new(3);
        assert_eq!(h.store("a"), StoreOutcome::Stored);
        assert_eq!(h.store("b"), StoreOutcome::Stored);
        assert_eq!(h.store("c"), StoreOutcome::Cleared);
        assert_eq!(h.write_index(), 0);
        assert_eq!(h.cursor(), 0);
        assert!(h.entries().iter().all(String::is_empty));
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), None);
    }

    #[test]
    fn store_after_reset_starts_over() {
        let mut h = filled(3, &["a", "b", "c"]);
        assert_eq!(h.store("d"), StoreOutcome::Stored);
        assert_eq!(h.stored(), ["d"]);
        assert_eq!(h.recall_older(), Some("d"));
    }

    #[test]
    fn capacity_one_always_clears() {
        let mut h = HistoryBuffer::new(1);
        assert_eq!(h.store("a"), StoreOutcome::Cleared);
        assert_eq!(h.store("b"), StoreOutcome::Cleared);
        assert_eq!(h.recall_older(), None);
    }

    #[test]
    fn recall_older_walks_back_and_clamps() {
        let mut h = filled(5, &["a", "b"]);
        assert_eq!(h.recall_older(), Some("b"));
        assert_eq!(h.cursor(), 1);
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn recall_newer_walks_forward_to_empty_slot() {
        let mut h = filled(5, &["a", "b"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), Some("b"));
        assert_eq!(h.recall_newer(), Some(""));
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn recall_newer_at_end_is_noop() {
        let mut h = filled(5, &["a"]);
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn recall_on_empty_buffer() {
        let mut h = HistoryBuffer::new(5);
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), None);
    }

    #[test]
    fn store_resets_cursor_to_newest() {
        let mut h = filled(5, &["a", "b", "c"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.cursor(), 1);
        h.store("d");
        assert_eq!(h.cursor(), 4);
        assert_eq!(h.recall_older(), Some("d"));
    }

    #[test]
    fn zero_capacity_is_disabled() {
        let mut h = HistoryBuffer::new(0);
        assert!(!h.is_enabled());
        assert_eq!(h.store("a"), StoreOutcome::Disabled);
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.write_index(), 0);
    }

    #[test]
    fn duplicate_lines_are_kept() {
        let h = filled(5, &["quit", "quit"]);
        assert_eq!(h.stored(), ["quit", "quit"]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Store(String),
        Older,
        Newer,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{0,4}".prop_map(Op::Store),
            Just(Op::Older),
            Just(Op::Newer),
        ]
    }

    proptest! {
        #[test]
        fn cursor_and_index_stay_in_bounds(
            capacity in 1usize..8,
            ops in proptest::collection::vec(op(), 0..64),
        ) {
            let mut h = HistoryBuffer::new(capacity);
            for op in ops {
                match op {
                    Op::Store(line) => {
                        if h.store(&line) == StoreOutcome::Cleared {
                            prop_assert!(h.entries().iter().all(String::is_empty));
                        }
                    },
                    Op::Older => {
                        let had_entries = h.write_index() > 0;
                        prop_assert_eq!(h.recall_older().is_some(), had_entries);
                    },
                    Op::Newer => {
                        h.recall_newer();
                    },
                }
                prop_assert!(h.write_index() < capacity);
                prop_assert!(h.cursor() <= h.write_index());
                prop_assert_eq!(h.entries().len(), capacity);
            }
        }

        #[test]
        fn stores_between_resets_are_recalled_newest_first(
            lines in proptest::collection::vec("[a-z]{1,4}", 1..5),
        ) {
            let mut h = HistoryBuffer::new(lines.len() + 1);
            for line in &lines {
                prop_assert_eq!(h.store(line), StoreOutcome::Stored);
            }
            for line in lines.iter().rev() {
                prop_assert_eq!(h.recall_older(), Some(line.as_str()));
            }
        }
    }
}
