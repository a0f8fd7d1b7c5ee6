//! Caption search with a keyboard-navigable suggestion list.

use crate::constants::SEARCH_MIN_QUERY;

/// Case-insensitive substring match over `captions`, returning slide indices
/// in deck order. Queries shorter than the minimum match nothing.
pub fn suggest<S: AsRef<str>>(query: &str, captions: &[S]) -> Vec<usize> {
    let query = query.trim();
    if query.chars().count() < SEARCH_MIN_QUERY {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    captions
        .iter()
        .enumerate()
        .filter(|(_, caption)| caption.as_ref().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Down,
    Up,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Highlight moved or nothing happened.
    None,
    /// Enter on a highlighted suggestion: the slide index to show.
    Selected(usize),
    Hidden,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    items: Vec<usize>,
    highlighted: Option<usize>,
    visible: bool,
}

impl SuggestionList {
    /// Replace the suggestions. An empty result hides the list.
    pub fn show(&mut self, items: Vec<usize>) {
        self.visible = !items.is_empty();
        self.items = items;
        self.highlighted = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn handle_key(&mut self, key: SearchKey) -> SearchOutcome {
        if !self.visible {
            return SearchOutcome::None;
        }
        let last = self.items.len().saturating_sub(1);
        match key {
            SearchKey::Down => {
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
                SearchOutcome::None
            }
            SearchKey::Up => {
                self.highlighted = Some(self.highlighted.map_or(0, |i| i.saturating_sub(1)));
                SearchOutcome::None
            }
            SearchKey::Enter => match self.highlighted.and_then(|i| self.items.get(i)).copied() {
                Some(slide) => {
                    self.hide();
                    SearchOutcome::Selected(slide)
                }
                None => SearchOutcome::None,
            },
            SearchKey::Escape => {
                self.hide();
                SearchOutcome::Hidden
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTIONS: [&str; 5] = [
        "Technology news",
        "Sports updates",
        "Political developments",
        "Entertainment news",
        "Business trends",
    ];

    #[test]
    fn short_queries_match_nothing() {
        assert!(suggest("n", &CAPTIONS).is_empty());
        assert!(suggest("  s ", &CAPTIONS).is_empty());
    }

    #[test]
    fn matches_case_insensitively_in_order() {
        assert_eq!(suggest("NEWS", &CAPTIONS), vec![0, 3]);
        assert_eq!(suggest(" updates ", &CAPTIONS), vec![1]);
        assert!(suggest("weather", &CAPTIONS).is_empty());
    }

    #[test]
    fn empty_result_hides_the_list() {
        let mut list = SuggestionList::default();
        list.show(vec![]);
        assert!(!list.is_visible());
    }

    #[test]
    fn highlight_is_clamped_at_both_ends() {
        let mut list = SuggestionList::default();
        list.show(vec![0, 3]);

        list.handle_key(SearchKey::Up);
        assert_eq!(list.highlighted(), Some(0));
        list.handle_key(SearchKey::Down);
        list.handle_key(SearchKey::Down);
        list.handle_key(SearchKey::Down);
        assert_eq!(list.highlighted(), Some(1));
        list.handle_key(SearchKey::Up);
        assert_eq!(list.highlighted(), Some(0));
    }

    #[test]
    fn enter_selects_highlighted_slide() {
        let mut list = SuggestionList::default();
        list.show(vec![0, 3]);

        assert_eq!(list.handle_key(SearchKey::Enter), SearchOutcome::None);
        list.handle_key(SearchKey::Down);
        list.handle_key(SearchKey::Down);
        assert_eq!(list.handle_key(SearchKey::Enter), SearchOutcome::Selected(3));
        assert!(!list.is_visible());
    }

    #[test]
    fn escape_hides() {
        let mut list = SuggestionList::default();
        list.show(vec![2]);
        assert_eq!(list.handle_key(SearchKey::Escape), SearchOutcome::Hidden);
        assert_eq!(list.handle_key(SearchKey::Down), SearchOutcome::None);
    }
}
