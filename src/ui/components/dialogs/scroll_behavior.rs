use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll offset of a read-only dialog together with its scrollbar state.
///
/// The offset may run past the end of the content; renderers clamp it to
/// the number of lines they actually have.
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_SIZE));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::default();
    }

    /// Clamp the offset to the content and sync the scrollbar.
    /// Returns the offset to render from.
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_offset_to_content() {
        let mut scroll = DialogScroll::default();
        scroll.bottom();
        assert_eq!(scroll.clamp(30, 10), 20);
        scroll.page_up();
        assert_eq!(scroll.offset, 10);
        scroll.top();
        scroll.up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut scroll = DialogScroll::default();
        scroll.down();
        scroll.down();
        assert_eq!(scroll.clamp(3, 10), 0);
    }
}
