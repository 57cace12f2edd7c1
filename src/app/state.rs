use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use strum::IntoEnumIterator;
use throbber_widgets_tui::ThrobberState;

use crate::app::events::custom::AppEvent;
use crate::app::model::contact::ContactModel;
use crate::app::model::hero::HeroModel;
use crate::app::model::palette::CommandPalette;
use crate::app::model::popup::help::{create_help_popup, HelpPopUp};
use crate::app::model::toast::ToastState;
use crate::app::model::Model;
use crate::app::nav::{self, ScrollOptions, ScrollState, Viewport};
use crate::app::page::{Document, PageView};
use crate::app::worker::AppMessage;
use crate::config::{DevfolioConfig, ExternalLinks};
use crate::content::labels::UiLabels;
use crate::content::resume::ResumeData;
use crate::content::route::{replace_fragment, section_href, switch_locale_path};
use crate::content::{Locale, SectionId};
use crate::ui::header_height;

pub struct App {
    pub config: DevfolioConfig,
    pub locale: Locale,
    pub route: String,
    pub resume: &'static ResumeData,
    pub labels: &'static UiLabels,
    pub links: ExternalLinks,
    pub palette: CommandPalette,
    pub hero: HeroModel,
    pub contact: ContactModel,
    pub toast: ToastState,
    pub page: PageView,
    pub help: Option<HelpPopUp>,
    pub scroll_options: ScrollOptions,
    pub visible_sections: Vec<SectionId>,
    pub ticks: u32,
    pub throbber_state: ThrobberState,
    pub viewport: Viewport,
    pub header_hits: Vec<(Rect, SectionId)>,
}

impl App {
    pub fn new(config: DevfolioConfig, locale: Locale) -> Self {
        let resume = ResumeData::for_locale(locale);
        let labels = UiLabels::for_locale(locale);
        let links = config.resolved_links(resume);
        let scroll_options = ScrollOptions::from_config(config.scroll.as_ref());
        let visible_sections: Vec<SectionId> = SectionId::iter()
            .filter(|&section| !config.is_hidden(section))
            .collect();
        let now = Instant::now();

        App {
            route: format!("/{locale}"),
            palette: CommandPalette::new(locale, &links),
            hero: HeroModel::new(now),
            contact: ContactModel::new(),
            toast: ToastState::new(),
            page: PageView::new(scroll_options.behavior),
            help: None,
            resume,
            labels,
            links,
            locale,
            config,
            scroll_options,
            visible_sections,
            ticks: 0,
            throbber_state: ThrobberState::default(),
            viewport: Viewport {
                width: 80,
                height: 24,
            },
            header_hits: vec![],
        }
    }

    /// Rows available to the page between the sticky header and the footer.
    pub fn content_height(&self) -> usize {
        usize::from(
            self.viewport
                .height
                .saturating_sub(header_height(self.viewport.width) + 1),
        )
    }

    /// Re-lays-out the document for the given width. Runs on every draw so
    /// section tops always match what is on screen.
    pub fn rebuild_document(&mut self, width: u16) {
        self.page.document = Document::build(
            self.resume,
            self.labels,
            &self.hero,
            &self.contact,
            &self.visible_sections,
            self.ticks,
            width,
        );
        let max = self.page.max_scroll(self.content_height());
        self.page.scroll.clamp(max);
    }

    pub fn update(&mut self, event: &AppEvent) -> (Option<AppEvent>, Vec<AppMessage>) {
        match event {
            AppEvent::Tick => {
                self.on_tick(Instant::now());
                (Some(AppEvent::Tick), vec![])
            }
            AppEvent::Resize(width, height) => {
                self.viewport = Viewport {
                    width: *width,
                    height: *height,
                };
                self.rebuild_document(*width);
                (None, vec![])
            }
            _ => self.handle_input(event),
        }
    }

    fn on_tick(&mut self, now: Instant) {
        self.ticks += 1;
        self.throbber_state.calc_next();
        self.hero.on_tick(now);
        self.contact.on_tick(now);
        self.toast.on_tick(now);

        let nav_height = header_height(self.viewport.width);
        let viewport = self.viewport;
        let options = self.scroll_options;
        let content_height = self.content_height();
        let PageView { document, scroll } = &mut self.page;
        scroll.advance_animation();
        nav::process_correction(
            scroll,
            |section| document.section_top(section),
            viewport,
            nav_height,
            &options,
            now,
        );
        scroll.clamp(document.height().saturating_sub(content_height));
    }

    fn handle_input(&mut self, event: &AppEvent) -> (Option<AppEvent>, Vec<AppMessage>) {
        // The palette sees every event first so mod+K works from anywhere
        let (fall_through, palette_messages) = self.palette.update(event);
        let mut messages = self.intercept_messages(palette_messages);
        let Some(event) = fall_through else {
            return (None, messages);
        };

        if self.help.is_some() {
            if let AppEvent::Key(key_event) = &event {
                if matches!(
                    key_event.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')
                ) {
                    self.help = None;
                }
            }
            return (None, messages);
        }

        match event {
            AppEvent::Key(key_event) => {
                if self.handle_global_key(&key_event, &mut messages) {
                    return (None, messages);
                }
                let content_height = self.content_height();
                if self.page.handle_scroll_keys(&key_event, content_height) {
                    return (None, messages);
                }
                (Some(AppEvent::Key(key_event)), messages)
            }
            AppEvent::Mouse(mouse_event) => self.handle_mouse(&mouse_event, messages),
            other => (Some(other), messages),
        }
    }

    /// Navigation and locale switches need the terminal geometry, so they
    /// are resolved here instead of travelling to the worker.
    fn intercept_messages(&mut self, messages: Vec<AppMessage>) -> Vec<AppMessage> {
        let mut out = Vec::with_capacity(messages.len());
        for message in messages {
            match message {
                AppMessage::NavigateSection(section) => self.navigate_to_section(section),
                AppMessage::SwitchLocale(locale) => self.switch_locale(locale),
                other => out.push(other),
            }
        }
        out
    }

    fn handle_global_key(&mut self, key_event: &KeyEvent, out: &mut Vec<AppMessage>) -> bool {
        let plain = key_event
            .modifiers
            .difference(KeyModifiers::SHIFT)
            .is_empty();

        match key_event.code {
            KeyCode::Char('?') if plain => {
                self.help = Some(create_help_popup());
                true
            }
            KeyCode::Tab => {
                self.navigate_relative(1);
                true
            }
            KeyCode::BackTab => {
                self.navigate_relative(-1);
                true
            }
            KeyCode::Char('s') if plain && self.hero.is_running() => {
                self.hero.skip();
                true
            }
            KeyCode::Char('v') if plain && self.hero.output_visible() => {
                self.hero.toggle_raw_json();
                true
            }
            KeyCode::Char('y') if plain && self.hero.output_visible() => {
                out.push(AppMessage::CopyText {
                    text: HeroModel::profile_json(self.resume),
                    success: self.labels.hero.output_copied.to_string(),
                    error: self.labels.contact.copy_error.to_string(),
                });
                self.hero.mark_copied(Instant::now());
                true
            }
            KeyCode::Char('c') if plain => {
                let email = self.links.email.clone();
                out.push(AppMessage::CopyText {
                    text: email.clone(),
                    success: self.labels.contact.copy_success.replace("{email}", &email),
                    error: self.labels.contact.copy_error.to_string(),
                });
                self.contact.mark_copied(Instant::now());
                true
            }
            KeyCode::Char('o') if plain => {
                out.push(AppMessage::OpenExternal(self.links.linkedin.clone()));
                true
            }
            KeyCode::Char(digit @ '1'..='9') if plain => {
                let sections: Vec<SectionId> = self.page.document.sections().collect();
                let index = digit as usize - '1' as usize;
                if let Some(&section) = sections.get(index) {
                    self.navigate_to_section(section);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(
        &mut self,
        mouse_event: &MouseEvent,
        messages: Vec<AppMessage>,
    ) -> (Option<AppEvent>, Vec<AppMessage>) {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse_event.column, mouse_event.row);
                let hit = self
                    .header_hits
                    .iter()
                    .find(|(rect, _)| rect.contains(position))
                    .map(|(_, section)| *section);
                if let Some(section) = hit {
                    self.navigate_to_section(section);
                    return (None, messages);
                }
                (Some(AppEvent::Mouse(*mouse_event)), messages)
            }
            MouseEventKind::ScrollDown => {
                let max = self.page.max_scroll(self.content_height());
                self.page.scroll.scroll_by(3, max);
                (None, messages)
            }
            MouseEventKind::ScrollUp => {
                let max = self.page.max_scroll(self.content_height());
                self.page.scroll.scroll_by(-3, max);
                (None, messages)
            }
            _ => (Some(AppEvent::Mouse(*mouse_event)), messages),
        }
    }

    /// In-page scroll when the section exists; otherwise the cross-page
    /// fallback: a full load of `/<locale>#<section>`.
    pub fn navigate_to_section(&mut self, section: SectionId) {
        let now = Instant::now();
        let nav_height = header_height(self.viewport.width);
        let viewport = self.viewport;
        let options = self.scroll_options;

        let PageView { document, scroll } = &mut self.page;
        let found = nav::navigate(
            scroll,
            section,
            |s| document.section_top(s),
            viewport,
            nav_height,
            &options,
            now,
        );

        if found {
            // Replace, never push: section jumps don't pollute history
            self.route = replace_fragment(&self.route, section.as_str());
            return;
        }

        self.route = section_href(self.locale, section.as_str());
        self.full_reload(now);
        // The freshly loaded page may carry the section; land on it
        // instantly, or stay at the top like any other page load
        let PageView { document, scroll } = &mut self.page;
        if let Some(top) = document.section_top(section) {
            let target = nav::compute_target_top(
                scroll.offset,
                top as isize - scroll.offset as isize,
                nav_height,
                options.extra_offset(viewport.is_narrow()),
            );
            scroll.jump_to(target, document.height());
        }
    }

    fn navigate_relative(&mut self, delta: isize) {
        let sections: Vec<SectionId> = self.page.document.sections().collect();
        if sections.is_empty() {
            return;
        }
        let index = self
            .page
            .current_section()
            .and_then(|current| sections.iter().position(|&s| s == current))
            .unwrap_or(0);
        let last = isize::try_from(sections.len() - 1).unwrap_or(0);
        let next = (isize::try_from(index).unwrap_or(0) + delta).clamp(0, last);
        self.navigate_to_section(sections[usize::try_from(next).unwrap_or(0)]);
    }

    /// Full page load: locale rewrite of the route's first segment, then a
    /// wholesale content and registry rebuild. Not a soft transition.
    pub fn switch_locale(&mut self, target: Locale) {
        self.route = switch_locale_path(&self.route, target);
        self.locale = target;
        self.resume = ResumeData::for_locale(target);
        self.labels = UiLabels::for_locale(target);
        self.links = self.config.resolved_links(self.resume);
        self.palette.rebuild(target, &self.links);
        self.full_reload(Instant::now());
    }

    fn full_reload(&mut self, now: Instant) {
        self.hero = HeroModel::new(now);
        self.contact = ContactModel::new();
        self.help = None;
        self.page.scroll = ScrollState::new(self.scroll_options.behavior);
        self.rebuild_document(self.viewport.width);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::model::hero::HeroPhase;

    use super::*;

    fn test_app() -> App {
        let mut app = App::new(DevfolioConfig::default(), Locale::Es);
        app.viewport = Viewport {
            width: 100,
            height: 30,
        };
        app.rebuild_document(100);
        app
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn locale_switch_is_a_full_page_load() {
        let mut app = test_app();
        app.hero.skip();
        app.switch_locale(Locale::En);

        assert_eq!(app.route, "/en");
        assert_eq!(app.locale, Locale::En);
        assert_eq!(app.labels.nav.home, "Home");
        // The hero animation restarts, as it would on a real reload
        assert_eq!(app.hero.phase, HeroPhase::Idle);
        assert_eq!(app.page.scroll.offset, 0);
    }

    #[test]
    fn in_page_navigation_replaces_the_fragment() {
        let mut app = test_app();
        app.navigate_to_section(SectionId::Skills);

        assert_eq!(app.route, "/es#skills");
        assert!(app.page.scroll.is_animating());
        assert!(app.page.scroll.has_pending_correction());
    }

    #[test]
    fn missing_section_falls_back_to_a_full_load() {
        let config = DevfolioConfig::from_str("hidden_sections = [\"contact\"]").unwrap();
        let mut app = App::new(config, Locale::Es);
        app.viewport = Viewport {
            width: 100,
            height: 30,
        };
        app.rebuild_document(100);
        app.hero.skip();
        app.page.scroll.jump_to(40, 1000);

        app.navigate_to_section(SectionId::Contact);

        assert_eq!(app.route, "/es#contact");
        // The section does not exist after the reload either: fresh page, top
        assert_eq!(app.hero.phase, HeroPhase::Idle);
        assert_eq!(app.page.scroll.offset, 0);
        assert!(!app.page.scroll.is_animating());
    }

    #[test]
    fn palette_execution_routes_through_the_navigator() {
        let mut app = test_app();
        app.update(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(app.palette.open);

        let (_, messages) = app.update(&key(KeyCode::Enter, KeyModifiers::NONE));
        // First command is "Go to Home": intercepted, nothing for the worker
        assert!(messages.is_empty());
        assert!(!app.palette.open);
        assert_eq!(app.route, "/es#hero");
    }

    #[test]
    fn copy_email_emits_a_clipboard_request() {
        let mut app = test_app();
        let (_, messages) = app.update(&key(KeyCode::Char('c'), KeyModifiers::NONE));

        assert_eq!(messages.len(), 1);
        match &messages[0] {
            AppMessage::CopyText { text, success, .. } => {
                assert_eq!(text, &app.links.email);
                assert!(success.contains(&app.links.email));
            }
            other => panic!("expected CopyText, got {other:?}"),
        }
        assert!(app.contact.is_copied());
    }

    #[test]
    fn tab_walks_sections_in_order() {
        let mut app = test_app();
        app.hero.skip();
        app.rebuild_document(100);

        app.update(&key(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(app.route, "/es#metrics");
    }

    #[test]
    fn digit_keys_jump_directly() {
        let mut app = test_app();
        app.update(&key(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(app.route, "/es#experience");
    }

    #[test]
    fn quit_key_falls_through() {
        let mut app = test_app();
        let (fall_through, _) = app.update(&key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(fall_through.is_some());
    }

    #[test]
    fn help_popup_consumes_input_until_closed() {
        let mut app = test_app();
        app.update(&key(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(app.help.is_some());

        let (fall_through, _) = app.update(&key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(fall_through.is_none());
        assert!(app.help.is_none());
    }
}
