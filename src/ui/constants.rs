use ratatui::style::{Color, Modifier, Style};

// Theme colors matching system theme
pub const BACKGROUND: Color = Color::Rgb(0x25, 0x23, 0x21);      // #252321
pub const FOREGROUND: Color = Color::Rgb(0xd3, 0xc6, 0xaa);      // #d3c6aa
pub const BLACK: Color = Color::Rgb(0x34, 0x40, 0x45);           // #344045
pub const RED: Color = Color::Rgb(0xcf, 0x6a, 0x6d);             // #cf6a6d
pub const GREEN: Color = Color::Rgb(0x96, 0xad, 0x73);           // #96ad73
pub const YELLOW: Color = Color::Rgb(0xc6, 0xab, 0x73);          // #c6ab73
pub const BLUE: Color = Color::Rgb(0x72, 0xa9, 0xa2);            // #72a9a2
pub const MAGENTA: Color = Color::Rgb(0xc1, 0x8a, 0xa5);         // #c18aa5
pub const CYAN: Color = Color::Rgb(0x76, 0xad, 0x84);            // #76ad84
pub const WHITE: Color = Color::Rgb(0xbf, 0xb4, 0x9d);           // #bfb49d

pub const BRIGHT_BLACK: Color = Color::Rgb(0x5e, 0x68, 0x60);    // #5e6860
pub const BRIGHT_GREEN: Color = Color::Rgb(0x78, 0x89, 0x5c);    // #78895c
pub const BRIGHT_BLUE: Color = Color::Rgb(0x5a, 0x85, 0x80);     // #5a8580
pub const BRIGHT_MAGENTA: Color = Color::Rgb(0x9a, 0x6d, 0x83);  // #9a6d83

// Section accent roles: "operational" greens for live status, the blue
// accent for values and links, mirroring the site palette.
pub const OPERATIONAL: Color = GREEN;
pub const ACCENT: Color = BLUE;

pub const DEFAULT_STYLE: Style = Style {
    fg: Some(FOREGROUND),
    bg: Some(BACKGROUND),
    underline_color: None,
    add_modifier: Modifier::empty(),
    sub_modifier: Modifier::empty(),
};

pub const SELECTED_STYLE: Style = Style {
    fg: Some(Color::Black),
    bg: Some(GREEN),
    underline_color: None,
    add_modifier: Modifier::BOLD,
    sub_modifier: Modifier::empty(),
};

pub const HEADER_STYLE: Style = Style {
    fg: Some(GREEN),
    bg: Some(BACKGROUND),
    underline_color: None,
    add_modifier: Modifier::BOLD,
    sub_modifier: Modifier::empty(),
};

pub const EYEBROW_STYLE: Style = Style {
    fg: Some(GREEN),
    bg: Some(BACKGROUND),
    underline_color: None,
    add_modifier: Modifier::empty(),
    sub_modifier: Modifier::empty(),
};

pub const DIM_STYLE: Style = Style {
    fg: Some(BRIGHT_BLACK),
    bg: Some(BACKGROUND),
    underline_color: None,
    add_modifier: Modifier::empty(),
    sub_modifier: Modifier::empty(),
};
