use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::Line;

use crate::app::model::contact::ContactModel;
use crate::app::model::hero::HeroModel;
use crate::app::model::HALF_PAGE_SIZE;
use crate::app::nav::{ScrollBehavior, ScrollState};
use crate::content::labels::UiLabels;
use crate::content::resume::ResumeData;
use crate::content::SectionId;
use crate::ui::sections::section_lines;

/// The laid-out virtual page: every visible section rendered to rows for a
/// concrete width. Rebuilt on every draw, so section tops always reflect
/// the current terminal geometry.
#[derive(Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    tops: Vec<(SectionId, usize)>,
    pub width: u16,
}

impl Document {
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        resume: &ResumeData,
        labels: &'static UiLabels,
        hero: &HeroModel,
        contact: &ContactModel,
        sections: &[SectionId],
        ticks: u32,
        width: u16,
    ) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut tops = Vec::with_capacity(sections.len());

        for &section in sections {
            tops.push((section, lines.len()));
            lines.extend(section_lines(
                section, resume, labels, hero, contact, ticks, width,
            ));
            lines.push(Line::default());
        }

        Document { lines, tops, width }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn section_top(&self, section: SectionId) -> Option<usize> {
        self.tops
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, top)| *top)
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.tops.iter().map(|(id, _)| *id)
    }

    /// The section whose top is the closest one at or above `offset`.
    pub fn section_at(&self, offset: usize) -> Option<SectionId> {
        self.tops
            .iter()
            .take_while(|(_, top)| *top <= offset)
            .last()
            .map(|(id, _)| *id)
            .or_else(|| self.tops.first().map(|(id, _)| *id))
    }
}

/// Scrollable view over the document.
pub struct PageView {
    pub document: Document,
    pub scroll: ScrollState,
}

impl PageView {
    pub fn new(behavior: ScrollBehavior) -> Self {
        PageView {
            document: Document::default(),
            scroll: ScrollState::new(behavior),
        }
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.document.height().saturating_sub(viewport_height)
    }

    pub fn current_section(&self) -> Option<SectionId> {
        self.document.section_at(self.scroll.offset)
    }

    /// Standard scrolling keybinds. Any manual scroll supersedes an
    /// in-flight navigation (animation plus corrective snap).
    pub fn handle_scroll_keys(&mut self, key_event: &KeyEvent, viewport_height: usize) -> bool {
        let max = self.max_scroll(viewport_height);

        if key_event.modifiers == KeyModifiers::CONTROL {
            match key_event.code {
                KeyCode::Char('d') => {
                    self.scroll.scroll_by(HALF_PAGE_SIZE as isize, max);
                    return true;
                }
                KeyCode::Char('u') => {
                    self.scroll.scroll_by(-(HALF_PAGE_SIZE as isize), max);
                    return true;
                }
                _ => {}
            }
        }

        match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.scroll_by(1, max);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.scroll_by(-1, max);
                true
            }
            KeyCode::Char('g') => {
                self.scroll.jump_to(0, max);
                true
            }
            KeyCode::Char('G') => {
                self.scroll.jump_to(max, max);
                true
            }
            KeyCode::PageDown => {
                self.scroll.scroll_by(viewport_height as isize, max);
                true
            }
            KeyCode::PageUp => {
                self.scroll.scroll_by(-(viewport_height as isize), max);
                true
            }
            _ => false,
        }
    }
}
