use super::events::custom::AppEvent;
use super::worker::AppMessage;

pub mod contact;
pub mod filter;
pub mod hero;
pub mod palette;
pub mod popup;
pub mod registry;
pub mod toast;

/// Number of rows to jump when using half-page navigation (Ctrl+D / Ctrl+U)
pub const HALF_PAGE_SIZE: usize = 10;

pub trait Model {
    fn update(&mut self, event: &AppEvent) -> (Option<AppEvent>, Vec<AppMessage>);
}
