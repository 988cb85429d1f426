//! TUI rendering for the Vitrine landing page using ratatui.

mod input;
mod overlay;
mod theme;

pub use input::handle_events;
pub use theme::{Palette, palette};

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use vitrine_engine::page::{HERO_ROWS, SECTION_ROWS};
use vitrine_engine::{App, Direction, Section, Theme};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let palette = palette(app.theme());

    // Clear with background color.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status hints
        ])
        .split(frame.area());

    draw_sparks(frame, app, &palette, chunks[1], now);
    draw_header(frame, app, &palette, chunks[0]);
    draw_body(frame, app, &palette, chunks[1]);
    draw_hints(frame, app, &palette, chunks[2]);

    if app.page().nav_open() {
        overlay::draw_nav(frame, app, &palette);
    }
    if app.cookies().is_visible() {
        overlay::draw_cookie_card(frame, app, &palette);
    }
    // The gate goes last: while locked it blocks everything underneath.
    if app.gate().is_visible() {
        overlay::draw_gate(frame, app, &palette);
    }
}

/// Pinned header: brand, section links, language label. Blanked while
/// hidden by downward scroll.
fn draw_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    if app.scroll().header_hidden() {
        return;
    }
    let page = app.page();

    let titles: Vec<String> = page
        .sections
        .iter()
        .map(|s| s.title.text().to_string())
        .collect();
    let mut spans = vec![Span::styled(page.brand.text(), palette.heading_style())];
    for (i, title) in titles.iter().enumerate() {
        spans.push(Span::styled("   ", palette.muted_style()));
        spans.push(Span::styled(format!("{} ", i + 1), palette.accent_style()));
        spans.push(Span::styled(title.clone(), palette.text_style()));
    }

    let theme_glyph = match app.theme() {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    };
    let right = Line::from(vec![
        Span::styled(page.lang_label(), palette.accent_style()),
        Span::raw("  "),
        Span::styled(theme_glyph, palette.text_style()),
    ])
    .alignment(Alignment::Right);

    let header_block = Block::default().style(Style::default().bg(palette.bg_panel));
    frame.render_widget(header_block, area);

    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    frame.render_widget(Paragraph::new(right), inner);
}

/// The scrollable page: hero, sections, footer. Laid out with the same
/// row constants the engine uses for anchor jumps.
fn draw_body(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let page = app.page();
    let alignment = match page.direction() {
        Direction::Ltr => Alignment::Left,
        Direction::Rtl => Alignment::Right,
    };

    let mut lines: Vec<Line> = Vec::new();

    // Hero.
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        page.hero_lead.text(),
        palette.heading_style(),
    )));
    let typed = app.typer().display();
    lines.push(Line::from(vec![
        Span::styled(typed, palette.accent_style()),
        Span::styled("▌", palette.muted_style()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        page.hero_sub.text(),
        palette.text_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", page.cta.text()),
        palette.accent_style().add_modifier(Modifier::REVERSED),
    )));
    pad_to(&mut lines, HERO_ROWS as usize);

    // Sections.
    for section in &page.sections {
        push_section(&mut lines, section, palette);
    }

    // Footer.
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        page.footer.text(),
        palette.muted_style(),
    )));

    let body = Paragraph::new(lines)
        .alignment(alignment)
        .scroll((app.scroll().offset_rows(), 0));
    let inner = area.inner(Margin {
        horizontal: 4,
        vertical: 0,
    });
    frame.render_widget(body, inner);
}

fn push_section<'a>(lines: &mut Vec<Line<'a>>, section: &'a Section, palette: &Palette) {
    let start = lines.len();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        section.title.text(),
        palette.heading_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        section.body.text(),
        palette.text_style(),
    )));
    pad_to(lines, start + SECTION_ROWS as usize);
}

fn pad_to(lines: &mut Vec<Line>, len: usize) {
    while lines.len() < len {
        lines.push(Line::from(""));
    }
}

/// Decorative sparks, drawn under the page text: only cells the body
/// paragraph left blank keep their spark.
fn draw_sparks(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    let Some(field) = app.sparks() else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }
    let spawned_at = field.spawned_at();
    let buffer = frame.buffer_mut();
    for spark in field.sparks() {
        let altitude = spark.altitude(spawned_at, now);
        let x = area.x + (spark.column * f32::from(area.width - 1)) as u16;
        let y = area.y + ((1.0 - altitude) * f32::from(area.height - 1)) as u16;
        let glyph = if spark.size > 20.0 { "✦" } else { "·" };
        if let Some(cell) = buffer.cell_mut(Position { x, y }) {
            cell.set_symbol(glyph);
            cell.set_style(Style::default().fg(palette.spark));
        }
    }
}

/// One-line key hints at the bottom.
fn draw_hints(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let hints = if app.gate().is_visible() {
        "type passphrase · Enter submit · Ctrl-C quit"
    } else if app.page().nav_open() {
        "1-3 jump · Esc close · q quit"
    } else {
        "j/k scroll · 1-3 sections · l language · t theme · n menu · q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, palette.muted_style())))
            .alignment(Alignment::Center),
        area,
    );
}
