//! Browser-like navigation history.
//!
//! A linear stack of URLs with a cursor. `push` drops any forward entries,
//! `replace` rewrites the current entry in place, and `back`/`forward` move the
//! cursor without changing the stack.

/// Navigation history for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Starts a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// URL of the current entry.
    #[must_use]
    pub fn current(&self) -> &str {
        // The stack is never empty and the cursor always points into it.
        &self.entries[self.cursor]
    }

    /// Adds a new entry after the current one, discarding forward entries.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Rewrites the current entry.
    pub fn replace(&mut self, url: impl Into<String>) {
        self.entries[self.cursor] = url.into();
    }

    /// Moves one entry back; returns the new current URL, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Moves one entry forward; returns the new current URL, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_forward() {
        let mut history = History::new("/catalog");
        history.push("/catalog?product=1");
        history.push("/catalog?product=2");

        assert_eq!(history.back(), Some("/catalog?product=1"));
        assert_eq!(history.back(), Some("/catalog"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/catalog?product=1"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = History::new("/a");
        history.push("/b");
        history.back();
        history.push("/c");

        assert_eq!(history.forward(), None);
        assert_eq!(history.back(), Some("/a"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn replace_rewrites_in_place() {
        let mut history = History::new("/catalog");
        history.replace("/catalog?category=LR");

        assert_eq!(history.current(), "/catalog?category=LR");
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }
}
