use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameSession;

/// Frame-level values the driver supplies alongside the session.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
}

/// Renders the single HUD row and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let values = value_spans(session, info.theme);
    let values_width = line_width(&values);
    let [hints_area, values_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(values_width)]).areas(hud_row);

    frame.render_widget(
        Paragraph::new(Line::from(" P pause · R restart · Q quit"))
            .alignment(Alignment::Left)
            .style(Style::default().fg(info.theme.menu_footer)),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(values)).alignment(Alignment::Right),
        values_area,
    );

    play_area
}

fn value_spans<'a>(session: &GameSession, theme: &Theme) -> Vec<Span<'a>> {
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);

    vec![
        Span::styled("Len ", label),
        Span::styled(session.snake.len().to_string(), value),
        Span::styled("  Lvl ", label),
        Span::styled(session.level.to_string(), value),
        Span::styled("  Score ", label),
        Span::styled(session.score.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(session.high_score().to_string(), value),
        Span::raw(" "),
    ]
}

fn line_width(spans: &[Span<'_>]) -> u16 {
    let total: usize = spans.iter().map(|span| span.content.width()).sum();
    u16::try_from(total).unwrap_or(u16::MAX)
}
