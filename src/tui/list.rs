/// Cursor and scroll state for the result list
pub struct ListCursor {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ListCursor {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl ListCursor {
    /// Move selection back to the top, or clear it when the list is empty
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(next);
        self.ensure_visible(next);
    }

    pub fn select_prev(&mut self) {
        let prev = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(prev);
        self.ensure_visible(prev);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1).max(1);
        let next = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => 0,
        };
        self.selected = Some(next);
        self.ensure_visible(next);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1).max(1);
        let prev = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(prev);
        self.ensure_visible(prev);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.ensure_visible(0);
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let last = total - 1;
        self.selected = Some(last);
        self.ensure_visible(last);
    }

    // Scroll so that index is inside the viewport
    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index + 1 - self.visible_rows;
        }
    }
}
