/// Selection and scroll position over the result cards.
///
/// The card count is captured by [`CardListState::reset`] whenever the
/// coordinator replaces or clears its results, so every movement is clamped
/// to cards that exist. With no cards there is never a selection.
pub struct CardListState {
    len: usize,
    pub selected: Option<usize>,
    /// Index of the first card drawn
    pub scroll_offset: usize,
    /// Whole cards that fit on screen, updated on every draw
    pub visible_cards: usize,
}

impl Default for CardListState {
    fn default() -> Self {
        Self {
            len: 0,
            selected: None,
            scroll_offset: 0,
            visible_cards: 4,
        }
    }
}

impl CardListState {
    /// Start over for a freshly replaced result list
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = (len > 0).then_some(0);
        self.scroll_offset = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the selection by `delta` cards, stopping at either end
    pub fn move_by(&mut self, delta: isize) {
        let Some(last) = self.len.checked_sub(1) else {
            return;
        };
        let target = match self.selected {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.select(target);
    }

    /// Move by one screenful of cards
    pub fn page(&mut self, forward: bool) {
        let step = self.visible_cards.max(1) as isize;
        self.move_by(if forward { step } else { -step });
    }

    pub fn select_first(&mut self) {
        if !self.is_empty() {
            self.select(0);
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.len.checked_sub(1) {
            self.select(last);
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        let window = self.visible_cards.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + window {
            self.scroll_offset = index + 1 - window;
        }
    }
}
