use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Maps a terminal event to an app event. Key releases and focus/paste
    /// events carry no meaning here and are dropped at the source.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }
}
