use crate::app::nav::{Viewport, NARROW_BREAKPOINT};
use crate::app::state::App;
use crate::ui::constants::{ACCENT, DEFAULT_STYLE, DIM_STYLE, OPERATIONAL, SELECTED_STYLE};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;
use std::sync::{Arc, Mutex};
use throbber_widgets_tui::Throbber;

pub mod common;
pub mod constants;
pub mod sections;

/// Current rendered height of the sticky header: narrow terminals wrap the
/// section tabs onto their own row.
pub fn header_height(width: u16) -> u16 {
    if width <= NARROW_BREAKPOINT {
        3
    } else {
        2
    }
}

pub fn draw_ui(f: &mut Frame, app: &Arc<Mutex<App>>) {
    let mut app = app.lock().unwrap();
    let area = f.area();
    app.viewport = Viewport {
        width: area.width,
        height: area.height,
    };

    let nav_height = header_height(area.width);
    let [header_area, page_area, footer_area] = Layout::vertical([
        Constraint::Length(nav_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    app.rebuild_document(page_area.width);

    render_header(f, &mut app, header_area);
    render_page(f, &app, page_area);
    render_footer(f, &app, footer_area);

    app.palette.render(area, f.buffer_mut());
    if app.palette.open && app.palette.filter.is_enabled() {
        f.set_cursor_position(app.palette.filter.cursor.position);
    }

    if let Some(help) = &app.help {
        help.render(area, f.buffer_mut());
    }

    if let Some(toast) = app.toast.current() {
        toast.render(area, f.buffer_mut());
    }

    // The filter input may only take focus once the overlay has painted
    app.palette.complete_pending_focus();
}

fn render_header(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .style(DEFAULT_STYLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let narrow = area.width <= NARROW_BREAKPOINT;
    let (title_area, tabs_area) = if narrow {
        let [title, tabs] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
        (title, tabs)
    } else {
        let [title, tabs] = Layout::horizontal([Constraint::Length(18), Constraint::Min(0)])
            .areas(inner);
        (title, tabs)
    };

    let version = env!("CARGO_PKG_VERSION");
    let title = Line::from(vec![
        Span::styled(" devfolio", Style::default().fg(OPERATIONAL)),
        Span::styled(format!(" v{version} "), DIM_STYLE),
    ]);
    f.render_widget(Paragraph::new(title).style(DEFAULT_STYLE), title_area);

    // Section tabs; each label's rect doubles as its mouse hitbox
    app.header_hits.clear();
    let current = app.page.current_section();
    let mut x = tabs_area.x;
    for (index, section) in app.page.document.sections().enumerate() {
        let label = format!(" {} {} ", index + 1, section.nav_label(app.labels));
        let width = u16::try_from(label.chars().count()).unwrap_or(0);
        if x + width > tabs_area.right() {
            break;
        }
        let rect = Rect::new(x, tabs_area.y, width, 1);
        let style = if current == Some(section) {
            SELECTED_STYLE
        } else {
            DEFAULT_STYLE
        };
        f.render_widget(Paragraph::new(Line::from(label)).style(style), rect);
        app.header_hits.push((rect, section));
        x += width + 1;
    }

    // Right side: palette trigger, locale badge, loading throbber
    let trigger_label = format!(" {} {}+K ", app.labels.palette.trigger, app.palette.modifier_label);
    let locale_label = format!(" {} ", app.locale.as_str().to_uppercase());
    let right_width = u16::try_from(trigger_label.chars().count() + locale_label.chars().count() + 4)
        .unwrap_or(0);
    if tabs_area.width > right_width && x + right_width < tabs_area.right() {
        let right = Rect::new(
            tabs_area.right() - right_width,
            tabs_area.y,
            right_width,
            1,
        );
        let [throbber_area, locale_area, trigger_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Length(u16::try_from(locale_label.chars().count()).unwrap_or(0)),
            Constraint::Min(0),
        ])
        .areas(right);

        if app.hero.is_running() {
            let throbber = Throbber::default()
                .style(DEFAULT_STYLE)
                .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
            f.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
        }
        f.render_widget(
            Paragraph::new(Line::from(locale_label)).style(Style::default().fg(ACCENT)),
            locale_area,
        );
        f.render_widget(
            Paragraph::new(Line::from(trigger_label.clone())).style(DIM_STYLE),
            trigger_area,
        );
        app.palette.trigger_rect = Some(trigger_area);
    } else {
        app.palette.trigger_rect = None;
    }
}

fn render_page(f: &mut Frame, app: &App, area: Rect) {
    let offset = u16::try_from(app.page.scroll.offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(Text::from(app.page.document.lines.clone()))
        .style(DEFAULT_STYLE)
        .scroll((offset, 0));
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels;
    let route = format!("{} ", app.route);
    let [left_area, right_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(route.chars().count()).unwrap_or(0)),
    ])
    .areas(area);

    let left = Line::from(vec![
        Span::styled(format!(" {} ", labels.footer.status), DIM_STYLE),
        Span::styled("● ", Style::default().fg(OPERATIONAL)),
        Span::styled(format!("{}  ", labels.footer.online), DEFAULT_STYLE),
        Span::styled(format!("{} ", labels.footer.branch), DIM_STYLE),
        Span::styled(format!("{}  ", labels.footer.branch_value), DEFAULT_STYLE),
        Span::styled(format!("{} ", labels.footer.region), DIM_STYLE),
        Span::styled(labels.footer.region_value, DEFAULT_STYLE),
    ]);
    let right = Line::from(Span::styled(route, Style::default().fg(ACCENT)));

    f.render_widget(Paragraph::new(left).style(DEFAULT_STYLE), left_area);
    f.render_widget(Paragraph::new(right).style(DEFAULT_STYLE), right_area);
}
