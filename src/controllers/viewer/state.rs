use crate::core::data::page_rect::PageRect;
use crate::core::data::rotation::Rotation;

/// Everything that decides what the next frame looks like.
///
/// Two equal keys produce identical frames, so a cached frame can be reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderKey {
    pub document_revision: u64,
    pub page: Option<usize>,
    pub rotation: Rotation,
    pub inverted: bool,
    pub width: u32,
    pub height: u32,
    pub hits_revision: u64,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub current_page: usize,
    pub rotation: Rotation,
    pub inverted: bool,
    hits: Vec<PageRect>,
    needle: String,
    hits_revision: u64,
    document_revision: u64,
}

impl ViewState {
    #[must_use]
    pub fn hits(&self) -> &[PageRect] {
        &self.hits
    }

    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn set_hits(&mut self, needle: &str, hits: Vec<PageRect>) {
        self.needle = needle.to_string();
        self.hits = hits;
        self.hits_revision += 1;
    }

    pub fn clear_hits(&mut self) {
        if self.hits.is_empty() && self.needle.is_empty() {
            return;
        }

        self.hits.clear();
        self.needle.clear();
        self.hits_revision += 1;
    }

    pub fn move_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.clear_hits();
    }

    /// Starts over for a newly opened (or closed) document.
    ///
    /// Rotation and inversion are viewing preferences and carry over.
    pub fn reset_for_document(&mut self) {
        self.current_page = 0;
        self.clear_hits();
        self.document_revision += 1;
    }

    #[must_use]
    pub fn render_key(&self, has_document: bool, width: u32, height: u32) -> RenderKey {
        RenderKey {
            document_revision: self.document_revision,
            page: has_document.then_some(self.current_page),
            rotation: self.rotation,
            inverted: self.inverted,
            width,
            height,
            hits_revision: self.hits_revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_state_yields_equal_keys() {
        let state = ViewState::default();

        assert_eq!(state.render_key(true, 100, 100), state.render_key(true, 100, 100));
    }

    #[test]
    fn each_view_change_yields_a_new_key() {
        let mut state = ViewState::default();
        let initial = state.render_key(true, 100, 100);

        state.rotation = Rotation::Clockwise90;
        let rotated = state.render_key(true, 100, 100);
        assert_ne!(rotated, initial);

        state.inverted = true;
        let inverted = state.render_key(true, 100, 100);
        assert_ne!(inverted, rotated);

        state.set_hits("needle", vec![PageRect::new(0.0, 0.0, 1.0, 1.0)]);
        let searched = state.render_key(true, 100, 100);
        assert_ne!(searched, inverted);

        assert_ne!(state.render_key(true, 100, 101), searched);
        assert_ne!(state.render_key(false, 100, 100), searched);
    }

    #[test]
    fn moving_to_another_page_clears_hits() {
        let mut state = ViewState::default();
        state.set_hits("word", vec![PageRect::new(0.0, 0.0, 1.0, 1.0)]);

        state.move_to_page(3);

        assert_eq!(state.current_page, 3);
        assert!(state.hits().is_empty());
        assert_eq!(state.needle(), "");
    }

    #[test]
    fn clearing_empty_hits_keeps_the_key() {
        let mut state = ViewState::default();
        let before = state.render_key(true, 10, 10);

        state.clear_hits();

        assert_eq!(state.render_key(true, 10, 10), before);
    }

    #[test]
    fn reset_for_document_keeps_view_preferences() {
        let mut state = ViewState::default();
        state.rotation = Rotation::Clockwise180;
        state.inverted = true;
        state.current_page = 4;
        let before = state.render_key(true, 10, 10);

        state.reset_for_document();

        assert_eq!(state.current_page, 0);
        assert_eq!(state.rotation, Rotation::Clockwise180);
        assert!(state.inverted);
        assert_ne!(state.render_key(true, 10, 10), before);
    }
}
