use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_BONUS_FOOD, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
    GLYPH_SNAKE_TAIL, Theme,
};
use crate::food::FoodKind;
use crate::game::{GameSession, SessionStatus};
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders one full frame from immutable session state.
///
/// Called in every status; the non-running states draw their menu on top
/// of the playfield.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, info);

    let theme = info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_obstacles(frame, inner, session, theme);
    render_food(frame, inner, session, theme);
    render_snake(frame, inner, session, theme);

    match session.status {
        SessionStatus::NotStarted => {
            render_start_menu(frame, play_area, session.high_score(), theme);
        }
        SessionStatus::Paused => render_pause_menu(frame, play_area, theme),
        SessionStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score,
            session.high_score(),
            session.is_new_high_score(),
            theme,
        ),
        SessionStatus::Running => {}
    }
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let bounds = session.bounds();
    let buffer = frame.buffer_mut();

    for cell in session.obstacles.cells() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *cell) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, session.bounds(), session.food.position) else {
        return;
    };

    let (glyph, color) = match session.food.kind {
        FoodKind::Normal => (GLYPH_FOOD, theme.food),
        FoodKind::Bonus => (GLYPH_BONUS_FOOD, theme.bonus_food),
    };

    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::new().fg(color));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let bounds = session.bounds();
    let head = session.snake.head();
    let tail = session.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(session.snake.heading()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Projects a logical cell onto terminal coordinates inside `inner`.
///
/// Returns `None` for cells that fall outside the visible area, so a
/// terminal smaller than the grid degrades to clipping instead of
/// corrupting neighboring widgets.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
