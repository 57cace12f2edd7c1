use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Position;

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pub position: Position,
}

/// Line-editor state for the palette's query input. `enabled` tracks input
/// focus, which is granted one frame after the overlay opens, so it always
/// starts out false.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub enabled: bool,
    pub prefix: Option<String>,
    pub cursor: Cursor,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn focus(&mut self) {
        self.enabled = true;
    }

    pub fn reset(&mut self) {
        self.enabled = false;
        self.prefix = None;
    }

    pub fn query(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    /// Feeds a key into the editor; returns true when the query changed.
    pub fn update(&mut self, key_event: &KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char(c) => {
                self.prefix.get_or_insert_with(String::new).push(c);
                true
            }
            KeyCode::Backspace => match &mut self.prefix {
                Some(prefix) => {
                    prefix.pop();
                    if prefix.is_empty() {
                        self.prefix = None;
                    }
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn chars_append_to_the_query() {
        let mut filter = Filter::new();
        assert!(filter.update(&key(KeyCode::Char('g'))));
        assert!(filter.update(&key(KeyCode::Char('h'))));
        assert_eq!(filter.query(), "gh");
    }

    #[test]
    fn backspace_erases_and_empties_to_none() {
        let mut filter = Filter::new();
        filter.update(&key(KeyCode::Char('a')));
        assert!(filter.update(&key(KeyCode::Backspace)));
        assert_eq!(filter.prefix, None);
        // Backspace on an empty query does not count as a change
        assert!(!filter.update(&key(KeyCode::Backspace)));
    }

    #[test]
    fn reset_drops_query_and_focus() {
        let mut filter = Filter::new();
        filter.focus();
        filter.update(&key(KeyCode::Char('x')));
        filter.reset();
        assert!(!filter.is_enabled());
        assert_eq!(filter.query(), "");
    }
}
