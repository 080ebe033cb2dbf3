/// Contents of the page-number textbox.
///
/// Only text that is empty or names an existing 1-based page is ever held,
/// so an edit that would leave it invalid is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageNumberInput {
    text: String,
}

impl PageNumberInput {
    #[must_use]
    pub fn accepts(candidate: &str, page_count: usize) -> bool {
        if candidate.is_empty() {
            return true;
        }

        if !candidate.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        candidate
            .parse::<usize>()
            .is_ok_and(|page| (1..=page_count).contains(&page))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text if the edit is acceptable; returns whether it was.
    pub fn edit(&mut self, candidate: String, page_count: usize) -> bool {
        if !Self::accepts(&candidate, page_count) {
            return false;
        }

        self.text = candidate;
        true
    }

    /// Shows the current page, or nothing when no document is open.
    pub fn sync(&mut self, current_page: Option<usize>) {
        self.text = current_page.map(|page| (page + 1).to_string()).unwrap_or_default();
    }

    /// The zero-based page the text names.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        self.text.parse::<usize>().ok()?.checked_sub(1)
    }
}
