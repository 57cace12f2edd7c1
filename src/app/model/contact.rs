use std::time::{Duration, Instant};

const COPY_RESET: Duration = Duration::from_millis(1800);

/// Copied-indicator state for the contact block's email action. A fresh
/// copy supersedes the previous reset deadline.
#[derive(Debug, Default)]
pub struct ContactModel {
    copied_until: Option<Instant>,
}

impl ContactModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPY_RESET);
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_resets_after_deadline() {
        let start = Instant::now();
        let mut contact = ContactModel::new();
        contact.mark_copied(start);
        assert!(contact.is_copied());

        contact.on_tick(start + COPY_RESET);
        assert!(!contact.is_copied());
    }

    #[test]
    fn a_second_copy_extends_the_deadline() {
        let start = Instant::now();
        let mut contact = ContactModel::new();
        contact.mark_copied(start);
        contact.mark_copied(start + Duration::from_millis(1000));

        // The first deadline has passed but the second is still pending
        contact.on_tick(start + COPY_RESET);
        assert!(contact.is_copied());
        contact.on_tick(start + Duration::from_millis(1000) + COPY_RESET);
        assert!(!contact.is_copied());
    }
}
