use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::popup_area;

pub struct KeyBinding {
    pub name: &'static str,
    pub key_binding: &'static str,
    pub description: &'static str,
}

pub struct HelpPopUp {
    pub title: String,
    pub bindings: Vec<KeyBinding>,
}

impl Widget for &HelpPopUp {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = popup_area(area, 80, 80);
        let popup = Block::default()
            .border_type(BorderType::Rounded)
            .title(self.title.as_str())
            .borders(Borders::ALL);

        Clear.render(popup_area, buf);

        let text = self
            .bindings
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(
                        format!("<{}>: ", binding.key_binding),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{} - {}", binding.name, binding.description),
                        Style::default().dark_gray(),
                    ),
                ])
            })
            .collect::<Text>();

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(popup);
        paragraph.render(popup_area, buf);
    }
}

pub fn create_help_popup() -> HelpPopUp {
    HelpPopUp {
        title: "Keys - Press <Esc> or <q> to close".into(),
        bindings: vec![
            KeyBinding {
                name: "Commands",
                key_binding: "Ctrl+K / Cmd+K",
                description: "Open the command palette",
            },
            KeyBinding {
                name: "Scroll",
                key_binding: "j / k / Up / Down",
                description: "Scroll the page by one row",
            },
            KeyBinding {
                name: "Half page",
                key_binding: "Ctrl+D / Ctrl+U",
                description: "Scroll the page by half a screen",
            },
            KeyBinding {
                name: "Jump",
                key_binding: "g / G",
                description: "Jump to the top or bottom of the page",
            },
            KeyBinding {
                name: "Sections",
                key_binding: "Tab / Shift+Tab",
                description: "Go to the next or previous section",
            },
            KeyBinding {
                name: "Direct jump",
                key_binding: "1-6",
                description: "Go straight to a section by number",
            },
            KeyBinding {
                name: "Skip intro",
                key_binding: "s",
                description: "Skip the hero terminal animation",
            },
            KeyBinding {
                name: "Toggle JSON",
                key_binding: "v",
                description: "Show or hide the raw profile JSON",
            },
            KeyBinding {
                name: "Copy output",
                key_binding: "y",
                description: "Copy the profile JSON to the clipboard",
            },
            KeyBinding {
                name: "Copy email",
                key_binding: "c",
                description: "Copy the contact email to the clipboard",
            },
            KeyBinding {
                name: "LinkedIn",
                key_binding: "o",
                description: "Open the LinkedIn profile in the browser",
            },
            KeyBinding {
                name: "Help",
                key_binding: "?",
                description: "Show this help",
            },
            KeyBinding {
                name: "Quit",
                key_binding: "q / Ctrl-c",
                description: "Quit",
            },
        ],
    }
}
