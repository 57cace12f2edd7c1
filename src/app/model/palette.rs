use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::app::events::custom::AppEvent;
use crate::app::model::filter::Filter;
use crate::app::model::popup::popup_area;
use crate::app::model::registry::{build_commands, Command, CommandAction, GROUP_ORDER};
use crate::app::model::Model;
use crate::app::worker::AppMessage;
use crate::config::ExternalLinks;
use crate::content::labels::UiLabels;
use crate::content::Locale;
use crate::ui::common::icon_glyph;
use crate::ui::constants::{BRIGHT_BLACK, DEFAULT_STYLE, GREEN, HEADER_STYLE, SELECTED_STYLE};

/// Command palette overlay: owns the localized registry and one ephemeral
/// open/close session at a time. It sees every input event first so the
/// mod+K hotkey works no matter what has focus.
pub struct CommandPalette {
    pub open: bool,
    commands: Vec<Command>,
    pub filter: Filter,
    selected: usize,
    pending_focus: bool,
    pub modifier_label: &'static str,
    labels: &'static UiLabels,
    panel_rect: Option<Rect>,
    pub trigger_rect: Option<Rect>,
    row_hits: Vec<(u16, usize)>,
}

impl CommandPalette {
    pub fn new(locale: Locale, links: &ExternalLinks) -> Self {
        CommandPalette {
            open: false,
            commands: build_commands(locale, links),
            filter: Filter::new(),
            selected: 0,
            pending_focus: false,
            modifier_label: platform_modifier_label(),
            labels: UiLabels::for_locale(locale),
            panel_rect: None,
            trigger_rect: None,
            row_hits: vec![],
        }
    }

    /// Swaps the registry for a new locale or address set. Session state is
    /// dropped; the labels change atomically with the command list.
    pub fn rebuild(&mut self, locale: Locale, links: &ExternalLinks) {
        self.commands = build_commands(locale, links);
        self.labels = UiLabels::for_locale(locale);
        self.selected = 0;
        self.filter.reset();
    }

    pub fn open_palette(&mut self) {
        if !self.open {
            self.open = true;
            self.filter.reset();
            self.selected = 0;
        }
        // Re-arming replaces any stale focus latch from a previous cycle
        self.pending_focus = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        // Cancel the focus latch in case the overlay never got painted
        self.pending_focus = false;
        self.filter.reset();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open_palette();
        }
    }

    /// Called once the overlay has actually been painted; moving focus any
    /// earlier would target an input that is not laid out yet.
    pub fn complete_pending_focus(&mut self) {
        if self.open && self.pending_focus {
            self.pending_focus = false;
            self.filter.focus();
        }
    }

    pub fn filtered_indices(&self) -> Vec<usize> {
        let query = self.filter.query();
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, command)| command.matches(query))
            .map(|(index, _)| index)
            .collect()
    }

    fn select_next(&mut self) {
        let count = self.filtered_indices().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Closes the palette, then yields the highlighted command's action.
    /// Close-before-dispatch is load-bearing: a failing action can never
    /// hold the overlay open.
    fn execute_selected(&mut self) -> Vec<AppMessage> {
        let filtered = self.filtered_indices();
        let Some(&command_index) = filtered.get(self.selected) else {
            return vec![];
        };
        let action = self.commands[command_index].action.clone();
        self.close();
        vec![dispatch(&action)]
    }

    fn handle_key(&mut self, key_event: &KeyEvent) -> (Option<AppEvent>, Vec<AppMessage>) {
        if is_palette_hotkey(key_event) {
            self.toggle();
            return (None, vec![]);
        }
        if !self.open {
            return (Some(AppEvent::Key(*key_event)), vec![]);
        }
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            // Control chords (Ctrl+C in particular) belong to the app
            return (Some(AppEvent::Key(*key_event)), vec![]);
        }

        match key_event.code {
            KeyCode::Esc => self.close(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Enter => return (None, self.execute_selected()),
            _ => {
                if self.filter.update(key_event) {
                    // First visible command is highlighted after each change
                    self.selected = 0;
                }
            }
        }
        (None, vec![])
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> (Option<AppEvent>, Vec<AppMessage>) {
        let pressed = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        let position = Position::new(mouse.column, mouse.row);

        if !self.open {
            if pressed && self.trigger_rect.is_some_and(|rect| rect.contains(position)) {
                self.open_palette();
                return (None, vec![]);
            }
            return (Some(AppEvent::Mouse(*mouse)), vec![]);
        }

        if !pressed {
            // The overlay blocks everything underneath it
            return (None, vec![]);
        }

        match self.panel_rect {
            Some(panel) if panel.contains(position) => {
                if let Some(&(_, index)) = self.row_hits.iter().find(|(row, _)| *row == mouse.row) {
                    self.selected = index;
                    return (None, self.execute_selected());
                }
                (None, vec![])
            }
            // A press outside the rendered bounds dismisses the palette
            _ => {
                self.close();
                (None, vec![])
            }
        }
    }
}

impl Model for CommandPalette {
    fn update(&mut self, event: &AppEvent) -> (Option<AppEvent>, Vec<AppMessage>) {
        match event {
            AppEvent::Key(key_event) => self.handle_key(key_event),
            AppEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            _ => (Some(event.clone()), vec![]),
        }
    }
}

fn is_palette_hotkey(key_event: &KeyEvent) -> bool {
    matches!(key_event.code, KeyCode::Char('k' | 'K'))
        && key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// "Cmd" on Apple platforms, "Ctrl" elsewhere; decided once at build time.
fn platform_modifier_label() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd"
    } else {
        "Ctrl"
    }
}

fn dispatch(action: &CommandAction) -> AppMessage {
    match action {
        CommandAction::NavigateSection(section) => AppMessage::NavigateSection(*section),
        CommandAction::OpenExternal(url) => AppMessage::OpenExternal(url.clone()),
        CommandAction::ComposeEmail(address) => AppMessage::ComposeEmail(address.clone()),
        CommandAction::SwitchLocale(locale) => AppMessage::SwitchLocale(*locale),
        CommandAction::DownloadResume => AppMessage::DownloadResume,
    }
}

impl Widget for &mut CommandPalette {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.row_hits.clear();
        if !self.open {
            self.panel_rect = None;
            return;
        }

        let panel_area = popup_area(area, 60, 70);
        self.panel_rect = Some(panel_area);

        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .title(format!(" {} ", self.labels.palette.trigger))
            .style(DEFAULT_STYLE);
        let inner = block.inner(panel_area);

        Clear.render(panel_area, buf);
        block.render(panel_area, buf);

        let [input_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Query input; the terminal cursor is placed here once focused
        let query = self.filter.query().to_string();
        let input = if query.is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(GREEN)),
                Span::styled(self.labels.palette.placeholder, Style::default().fg(BRIGHT_BLACK)),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(GREEN)),
                Span::raw(query.clone()),
            ])
        };
        input.render(input_area, buf);
        self.filter.cursor.position = Position::new(
            input_area.x + 2 + u16::try_from(query.chars().count()).unwrap_or(0),
            input_area.y,
        );

        let filtered = self.filtered_indices();
        if filtered.is_empty() {
            // Defined empty state, not an empty group list
            let empty = Line::from(self.labels.palette.empty)
                .style(Style::default().fg(BRIGHT_BLACK))
                .centered();
            if list_area.height > 1 {
                let empty_area = Rect::new(list_area.x, list_area.y + 1, list_area.width, 1);
                empty.render(empty_area, buf);
            }
        } else {
            let mut y = list_area.y;
            let mut flat_index = 0usize;
            'groups: for group in GROUP_ORDER {
                let in_group: Vec<usize> = filtered
                    .iter()
                    .copied()
                    .filter(|&index| self.commands[index].group == group)
                    .collect();
                if in_group.is_empty() {
                    continue;
                }
                if y >= list_area.bottom() {
                    break;
                }
                Line::from(group.heading(self.labels).to_uppercase())
                    .style(HEADER_STYLE.add_modifier(Modifier::DIM))
                    .render(Rect::new(list_area.x, y, list_area.width, 1), buf);
                y += 1;

                for command_index in in_group {
                    if y >= list_area.bottom() {
                        break 'groups;
                    }
                    let command = &self.commands[command_index];
                    let style = if flat_index == self.selected {
                        SELECTED_STYLE
                    } else {
                        DEFAULT_STYLE
                    };
                    let mut spans = vec![
                        Span::raw("  "),
                        Span::raw(icon_glyph(command.icon)),
                        Span::raw("  "),
                        Span::raw(command.label),
                    ];
                    if let Some(shortcut) = command.shortcut {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(shortcut, Style::default().fg(BRIGHT_BLACK)));
                    }
                    Line::from(spans)
                        .style(style)
                        .render(Rect::new(list_area.x, y, list_area.width, 1), buf);
                    self.row_hits.push((y, flat_index));
                    y += 1;
                    flat_index += 1;
                }
            }
        }

        Line::from(format!(
            "{}+K toggle · Esc close · Enter run",
            self.modifier_label
        ))
        .style(Style::default().fg(BRIGHT_BLACK))
        .right_aligned()
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;

    fn test_links() -> ExternalLinks {
        ExternalLinks {
            email: "someone@example.com".to_string(),
            linkedin: "www.linkedin.com/in/someone".to_string(),
            github: "https://github.com/someone".to_string(),
        }
    }

    fn palette() -> CommandPalette {
        CommandPalette::new(Locale::En, &test_links())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, modifiers))
    }

    fn hotkey() -> AppEvent {
        key(KeyCode::Char('k'), KeyModifiers::CONTROL)
    }

    fn mouse_down(column: u16, row: u16) -> AppEvent {
        AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn hotkey_toggles_open_and_closed() {
        let mut palette = palette();
        assert!(!palette.open);

        let (fall_through, messages) = palette.update(&hotkey());
        assert!(palette.open);
        assert!(fall_through.is_none());
        assert!(messages.is_empty());

        palette.update(&hotkey());
        assert!(!palette.open);
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.update(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!palette.open);

        // Closed palette lets Escape fall through untouched
        let (fall_through, messages) = palette.update(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(fall_through.is_some());
        assert!(messages.is_empty());
    }

    #[test]
    fn outside_press_dismisses_without_dispatch() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.panel_rect = Some(Rect::new(10, 5, 40, 15));

        let (_, messages) = palette.update(&mouse_down(0, 0));
        assert!(!palette.open);
        assert!(messages.is_empty());
    }

    #[test]
    fn press_inside_panel_keeps_it_open() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.panel_rect = Some(Rect::new(10, 5, 40, 15));
        palette.row_hits.clear();

        let (_, messages) = palette.update(&mouse_down(12, 6));
        assert!(palette.open);
        assert!(messages.is_empty());
    }

    #[test]
    fn row_click_executes_that_command() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.panel_rect = Some(Rect::new(10, 5, 40, 15));
        palette.row_hits = vec![(7, 0), (8, 1)];

        let (_, messages) = palette.update(&mouse_down(12, 8));
        assert!(!palette.open);
        assert_eq!(messages, vec![AppMessage::NavigateSection(SectionId::Metrics)]);
    }

    #[test]
    fn trigger_click_opens_the_palette() {
        let mut palette = palette();
        palette.trigger_rect = Some(Rect::new(100, 0, 12, 1));
        palette.update(&mouse_down(105, 0));
        assert!(palette.open);
    }

    #[test]
    fn execution_closes_then_dispatches_exactly_once() {
        let mut palette = palette();
        palette.update(&hotkey());
        for c in "github".chars() {
            palette.update(&key(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let (_, messages) = palette.update(&key(KeyCode::Enter, KeyModifiers::NONE));

        assert!(!palette.open);
        assert_eq!(
            messages,
            vec![AppMessage::OpenExternal("https://github.com/someone".to_string())]
        );
    }

    #[test]
    fn closed_palette_never_dispatches() {
        let mut palette = palette();
        let (fall_through, messages) = palette.update(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(fall_through.is_some());
        assert!(messages.is_empty());
    }

    #[test]
    fn enter_on_empty_results_keeps_the_palette_open() {
        let mut palette = palette();
        palette.update(&hotkey());
        for c in "zzzz".chars() {
            palette.update(&key(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(palette.filtered_indices().is_empty());

        let (_, messages) = palette.update(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(palette.open);
        assert!(messages.is_empty());
    }

    #[test]
    fn filter_change_resets_the_highlight() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.update(&key(KeyCode::Down, KeyModifiers::NONE));
        palette.update(&key(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(palette.selected, 2);

        palette.update(&key(KeyCode::Char('e'), KeyModifiers::NONE));
        assert_eq!(palette.selected, 0);
    }

    #[test]
    fn selection_clamps_at_list_edges() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.update(&key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(palette.selected, 0);
        for _ in 0..50 {
            palette.update(&key(KeyCode::Down, KeyModifiers::NONE));
        }
        assert_eq!(palette.selected, palette.filtered_indices().len() - 1);
    }

    #[test]
    fn focus_lands_only_after_paint() {
        let mut palette = palette();
        palette.update(&hotkey());
        assert!(!palette.filter.is_enabled());

        palette.complete_pending_focus();
        assert!(palette.filter.is_enabled());
    }

    #[test]
    fn closing_before_paint_cancels_the_focus_latch() {
        let mut palette = palette();
        palette.update(&hotkey());
        palette.close();
        palette.complete_pending_focus();
        assert!(!palette.filter.is_enabled());
    }

    #[test]
    fn locale_rebuild_swaps_labels_atomically() {
        let mut palette = palette();
        let before: Vec<&str> = palette.commands.iter().map(|c| c.label).collect();
        palette.rebuild(Locale::Es, &test_links());
        let after: Vec<&str> = palette.commands.iter().map(|c| c.label).collect();
        assert_ne!(before, after);
        assert_eq!(palette.commands.len(), 10);
    }
}
