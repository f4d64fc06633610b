//! Incremental reveal of filtered results
//!
//! Rendering is bounded to a prefix of the filtered sequence. The prefix
//! grows by a fixed page on demand and snaps back to one page whenever the
//! debounced term changes or a fetch completes.

/// Results revealed per step
pub const PAGE_SIZE: usize = 50;

/// Display-count cursor over the filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    display_count: usize,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            display_count: PAGE_SIZE,
        }
    }
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows actually shown for a filtered sequence of this length
    pub fn visible_len(&self, filtered_len: usize) -> usize {
        self.display_count.min(filtered_len)
    }

    /// True while part of the filtered sequence is still hidden
    pub fn can_reveal(&self, filtered_len: usize) -> bool {
        self.display_count < filtered_len
    }

    /// How many filtered rows remain hidden
    pub fn remaining(&self, filtered_len: usize) -> usize {
        filtered_len.saturating_sub(self.display_count)
    }

    /// Grow the prefix by one page; inert when everything is already shown
    pub fn reveal_more(&mut self, filtered_len: usize) {
        if self.can_reveal(filtered_len) {
            self.display_count += PAGE_SIZE;
        }
    }

    /// Snap back to the first page
    pub fn reset(&mut self) {
        self.display_count = PAGE_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one_page() {
        let reveal = RevealState::new();
        assert_eq!(reveal.visible_len(120), 50);
        assert_eq!(reveal.visible_len(7), 7);
        assert_eq!(reveal.visible_len(0), 0);
    }

    #[test]
    fn test_reveal_steps_through_filtered_length() {
        let mut reveal = RevealState::new();
        assert_eq!(reveal.visible_len(120), 50);
        assert!(reveal.can_reveal(120));

        reveal.reveal_more(120);
        assert_eq!(reveal.visible_len(120), 100);
        assert!(reveal.can_reveal(120));

        reveal.reveal_more(120);
        assert_eq!(reveal.visible_len(120), 120);
        assert!(!reveal.can_reveal(120));

        // fully shown, further reveals are inert
        reveal.reveal_more(120);
        assert_eq!(reveal.visible_len(120), 120);
    }

    #[test]
    fn test_short_sequence_never_reveals() {
        let mut reveal = RevealState::new();
        assert!(!reveal.can_reveal(7));
        reveal.reveal_more(7);
        assert_eq!(reveal.visible_len(7), 7);
        assert!(!reveal.can_reveal(50));
    }

    #[test]
    fn test_reset_snaps_back_to_first_page() {
        let mut reveal = RevealState::new();
        reveal.reveal_more(200);
        reveal.reveal_more(200);
        assert_eq!(reveal.visible_len(200), 150);

        reveal.reset();
        assert_eq!(reveal.visible_len(200), 50);
        assert_eq!(reveal, RevealState::new());
    }

    #[test]
    fn test_visible_never_exceeds_filtered() {
        let mut reveal = RevealState::new();
        for _ in 0..10 {
            reveal.reveal_more(73);
            assert!(reveal.visible_len(73) <= 73);
        }
        assert_eq!(reveal.visible_len(73), 73);
    }

    #[test]
    fn test_remaining_counts_hidden_rows() {
        let mut reveal = RevealState::new();
        assert_eq!(reveal.remaining(120), 70);
        reveal.reveal_more(120);
        assert_eq!(reveal.remaining(120), 20);
        reveal.reveal_more(120);
        assert_eq!(reveal.remaining(120), 0);
    }
}
