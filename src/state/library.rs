//! Selection state of the Learn screen.

use crate::content::library::{find_category, Category, Topic, LIBRARY};

/// Which category and topic the library shows, plus the reading scroll.
///
/// Ids are kept as given; lookups fall back to the first entries so an
/// unknown id never breaks rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryState {
    active_category: String,
    active_topic: String,
    scroll: u16,
}

impl Default for LibraryState {
    fn default() -> Self {
        let category = &LIBRARY[0];
        Self {
            active_category: category.id.to_string(),
            active_topic: category.first_topic().id.to_string(),
            scroll: 0,
        }
    }
}

impl LibraryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch category and jump to its first topic.
    pub fn select_category(&mut self, id: &str) {
        self.active_category = id.to_string();
        self.active_topic = self.current_category().first_topic().id.to_string();
        self.scroll = 0;
    }

    /// Show topic `id` of the current category from the top.
    ///
    /// The id is stored as given; an unknown one renders the first topic.
    pub fn select_topic(&mut self, id: &str) {
        self.active_topic = id.to_string();
        self.scroll = 0;
    }

    /// Active category, or the first one when the id is unknown.
    pub fn current_category(&self) -> &'static Category {
        find_category(&self.active_category).unwrap_or(&LIBRARY[0])
    }

    /// Active topic, or the first topic of the current category.
    pub fn current_topic(&self) -> &'static Topic {
        let category = self.current_category();
        category
            .topic(&self.active_topic)
            .unwrap_or_else(|| category.first_topic())
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category
    }

    pub fn active_topic_id(&self) -> &str {
        &self.active_topic
    }

    fn category_index(&self) -> usize {
        let current = self.current_category();
        LIBRARY.iter().position(|c| c.id == current.id).unwrap_or(0)
    }

    fn topic_index(&self) -> usize {
        let current = self.current_topic();
        self.current_category()
            .topics
            .iter()
            .position(|t| t.id == current.id)
            .unwrap_or(0)
    }

    /// Move to the next category, wrapping around.
    pub fn next_category(&mut self) {
        let index = (self.category_index() + 1) % LIBRARY.len();
        self.select_category(LIBRARY[index].id);
    }

    pub fn prev_category(&mut self) {
        let index = (self.category_index() + LIBRARY.len() - 1) % LIBRARY.len();
        self.select_category(LIBRARY[index].id);
    }

    /// Move to the next topic of the category, stopping at the last one.
    pub fn next_topic(&mut self) {
        let topics = self.current_category().topics;
        let index = (self.topic_index() + 1).min(topics.len() - 1);
        self.select_topic(topics[index].id);
    }

    pub fn prev_topic(&mut self) {
        let topics = self.current_category().topics;
        let index = self.topic_index().saturating_sub(1);
        self.select_topic(topics[index].id);
    }

    /// Lines scrolled down in the reading pane.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Keep the scroll inside the rendered content.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Back to the first category and topic.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
