use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::ui::constants::{BACKGROUND, GREEN, RED};

const TOAST_DISMISS: Duration = Duration::from_millis(2400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

/// One transient acknowledgement at a time. Leaf-action failures end up
/// here and nowhere else; nothing a toast reports is fatal.
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, superseding the previous one's dismiss deadline.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            expires_at: now + TOAST_DISMISS,
        });
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

impl Widget for &Toast {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.kind {
            ToastKind::Success => GREEN,
            ToastKind::Error => RED,
        };
        let width = u16::try_from(self.message.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width.saturating_sub(2));
        if width < 5 || area.height < 4 {
            return;
        }
        let toast_area = Rect::new(
            area.x + (area.width - width) / 2,
            area.bottom().saturating_sub(4),
            width,
            3,
        );

        Clear.render(toast_area, buf);
        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().fg(color).bg(BACKGROUND));
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);
        Line::from(self.message.as_str()).centered().render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_dismisses_after_its_deadline() {
        let start = Instant::now();
        let mut toasts = ToastState::new();
        toasts.show("copied", ToastKind::Success, start);
        assert!(toasts.current().is_some());

        toasts.on_tick(start + TOAST_DISMISS - Duration::from_millis(1));
        assert!(toasts.current().is_some());
        toasts.on_tick(start + TOAST_DISMISS);
        assert!(toasts.current().is_none());
    }

    #[test]
    fn a_new_toast_supersedes_the_old_deadline() {
        let start = Instant::now();
        let mut toasts = ToastState::new();
        toasts.show("first", ToastKind::Success, start);
        toasts.show("second", ToastKind::Error, start + Duration::from_millis(1000));

        // The first toast's deadline passing must not dismiss the second
        toasts.on_tick(start + TOAST_DISMISS);
        let toast = toasts.current().expect("second toast still visible");
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);

        toasts.on_tick(start + Duration::from_millis(1000) + TOAST_DISMISS);
        assert!(toasts.current().is_none());
    }
}
