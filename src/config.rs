use ratatui::style::Color;
use ratatui::symbols::border;

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Points granted for normal food.
pub const NORMAL_FOOD_POINTS: u32 = 10;

/// Points granted for bonus food.
pub const BONUS_FOOD_POINTS: u32 = 30;

/// Segments owed after eating normal food.
pub const NORMAL_FOOD_GROWTH: u32 = 1;

/// Segments owed after eating bonus food.
pub const BONUS_FOOD_GROWTH: u32 = 3;

/// Probability that a spawn produces bonus food.
pub const BONUS_FOOD_PROBABILITY: f64 = 0.08;

/// Score needed per level increase.
pub const POINTS_PER_LEVEL: u32 = 50;

/// Obstacle cells placed per level above the first.
pub const OBSTACLE_CELLS_PER_LEVEL: usize = 6;

/// Fixed driver tick interval in milliseconds. The simulation steps once
/// every [`ticks_per_step`] of these ticks; the poll/render rate never
/// changes with speed.
pub const TICK_INTERVAL_MS: u64 = 30;

/// Frame-cap sleep between driver iterations, in milliseconds.
pub const FRAME_SLEEP_MS: u64 = 16;

/// Step divisor at speed 1.
pub const BASE_TICKS_PER_STEP: u32 = 8;

/// Floor for the step divisor.
pub const MIN_TICKS_PER_STEP: u32 = 2;

/// Returns the speed rating for a level. Monotonically increasing.
#[must_use]
pub fn speed_for_level(level: u32) -> u32 {
    level
}

/// Returns how many driver ticks pass between snake steps at `speed`.
///
/// Higher speed shrinks the divisor down to [`MIN_TICKS_PER_STEP`], so
/// perceived motion accelerates without touching the tick rate.
#[must_use]
pub fn ticks_per_step(speed: u32) -> u32 {
    BASE_TICKS_PER_STEP
        .saturating_sub(speed.saturating_sub(1))
        .max(MIN_TICKS_PER_STEP)
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub bonus_food: Color,
    pub obstacle: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    bonus_food: Color::Yellow,
    obstacle: Color::Gray,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    bonus_food: Color::Magenta,
    obstacle: Color::Blue,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    bonus_food: Color::Cyan,
    obstacle: Color::Gray,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_BONUS_FOOD: &str = "◆";
pub const GLYPH_OBSTACLE: &str = "▒";

#[cfg(test)]
mod tests {
    use super::{BASE_TICKS_PER_STEP, MIN_TICKS_PER_STEP, speed_for_level, ticks_per_step};

    #[test]
    fn speed_rises_with_level() {
        assert!(speed_for_level(2) > speed_for_level(1));
        assert!(speed_for_level(10) > speed_for_level(9));
    }

    #[test]
    fn step_divisor_shrinks_with_speed_down_to_floor() {
        assert_eq!(ticks_per_step(1), BASE_TICKS_PER_STEP);
        assert!(ticks_per_step(2) < ticks_per_step(1));
        assert_eq!(ticks_per_step(100), MIN_TICKS_PER_STEP);

        for speed in 1..100 {
            assert!(ticks_per_step(speed + 1) <= ticks_per_step(speed));
            assert!(ticks_per_step(speed) >= MIN_TICKS_PER_STEP);
        }
    }
}
