//! Modal overlays: the passphrase gate, the nav overlay, and the cookie
//! card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::App;

use crate::theme::Palette;

/// The blocking passphrase overlay. Drawn last; captures all input while
/// visible.
pub fn draw_gate(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = centered_box(frame.area(), 46, 9);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_overlay))
        .padding(Padding::horizontal(2))
        .title(" Private preview ")
        .title_style(palette.heading_style());

    // Mask the candidate; show a block cursor at the end.
    let masked = "•".repeat(app.gate().input().width());
    let error_line = match app.gate().error() {
        Some(message) => Line::from(Span::styled(message, palette.error_style())),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(Span::styled(
            "Enter the passphrase to view this page.",
            palette.text_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", palette.muted_style()),
            Span::styled(masked, palette.text_style()),
            Span::styled("▌", palette.accent_style()),
        ]),
        error_line,
        Line::from(Span::styled("Enter to submit", palette.muted_style())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Full-screen navigation overlay.
pub fn draw_nav(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_overlay)),
        area,
    );

    let mut lines = vec![
        Line::from(Span::styled(
            app.page().brand.text(),
            palette.heading_style(),
        )),
        Line::from(""),
    ];
    for (i, section) in app.page().sections.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", i + 1), palette.accent_style()),
            Span::styled(section.title.text(), palette.text_style()),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "1-3 jump · Esc close",
        palette.muted_style(),
    )));

    let inner = centered_box(area, 36, (lines.len() + 2) as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Bottom cookie-consent card.
pub fn draw_cookie_card(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let width = 44.min(area.width.saturating_sub(2));
    let height = 5;
    if area.height <= height {
        return;
    }
    let card = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 1),
        width,
        height,
    };
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(Span::styled(
            app.page().cookie_text.text(),
            palette.text_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c] ", palette.accent_style()),
            Span::styled(app.page().cookie_accept.text(), palette.text_style()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        card,
    );
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        let boxed = centered_box(area, 40, 10);
        assert_eq!(boxed, Rect::new(20, 7, 40, 10));

        let clamped = centered_box(Rect::new(0, 0, 10, 4), 40, 10);
        assert_eq!(clamped.width, 10);
        assert_eq!(clamped.height, 4);
    }
}
