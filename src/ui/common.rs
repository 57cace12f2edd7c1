use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::app::model::registry::CommandIcon;

use super::constants::{DIM_STYLE, EYEBROW_STYLE, HEADER_STYLE};

/// Greedy word wrap to `width` columns. The document layout needs measured
/// line counts, so wrapping happens here rather than in the paragraph
/// widget.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// The "// Section Name" marker above every section title.
pub fn eyebrow_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), EYEBROW_STYLE))
}

pub fn title_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), HEADER_STYLE))
}

pub fn description_lines(text: &str, width: u16) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, DIM_STYLE)))
        .collect()
}

pub fn icon_glyph(icon: CommandIcon) -> &'static str {
    match icon {
        CommandIcon::Home => "⌂",
        CommandIcon::Folder => "▤",
        CommandIcon::Briefcase => "◆",
        CommandIcon::Wrench => "⚙",
        CommandIcon::Github => "◉",
        CommandIcon::Linkedin => "▣",
        CommandIcon::Mail => "✉",
        CommandIcon::Languages => "⇄",
        CommandIcon::Download => "⬇",
    }
}

/// Map a string to a consistent color using hash-based mapping.
/// Useful for consistently coloring technology tags.
pub fn hash_to_color(input: &str) -> Color {
    // Avoid red/green/yellow, which are reserved for status
    const COLORS: &[Color] = &[
        crate::ui::constants::BLUE,
        crate::ui::constants::BRIGHT_BLUE,
        crate::ui::constants::MAGENTA,
        crate::ui::constants::BRIGHT_MAGENTA,
        crate::ui::constants::CYAN,
        Color::Rgb(0x7f, 0xbb, 0xca), // Light blue
        Color::Rgb(0xb5, 0x89, 0xd6), // Light purple
        Color::Rgb(0x83, 0xc0, 0x92), // Light teal
        Color::Rgb(0xd6, 0x99, 0x78), // Light orange
        Color::Rgb(0xd6, 0x9c, 0xb8), // Light pink
    ];

    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    let hash = hasher.finish();

    COLORS[usize::try_from(hash % COLORS.len() as u64).unwrap_or(0)]
}

/// "tag1 · tag2 · tag3", each tag in its hash color.
pub fn tag_line(indent: &str, tags: &[String]) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" · ".to_string(), DIM_STYLE));
        }
        spans.push(Span::styled(
            tag.clone(),
            Style::default().fg(hash_to_color(tag)),
        ));
    }
    Line::from(spans)
}
