//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Style},
};
use std::time::Duration;

/// Minimum time that must elapse between movements of the snake
pub(crate) const FRAME_STEP: Duration = Duration::from_millis(100);

/// Number of cells across & down the board
pub(crate) const GAME_SIZE: Size = Size {
    width: 11,
    height: 11,
};

/// Number of terminal columns & rows used to draw one (nominally 48px square)
/// board cell.  Terminal character cells are about twice as tall as they are
/// wide, so two columns by one row comes out roughly square.
pub(crate) const CELL_FOOTPRINT: Size = Size {
    width: 2,
    height: 1,
};

/// The snake at the start of a game, tail first
pub(crate) const INITIAL_SNAKE: [Position; 4] = [
    Position::new(3, 3),
    Position::new(4, 3),
    Position::new(5, 3),
    Position::new(6, 3),
];

/// The food's position at the start of a game
pub(crate) const INITIAL_FOOD: Position = Position::ORIGIN;

/// Default style for cells occupied by the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().bg(Color::Rgb(0x08, 0xA3, 0xEF));

/// Default style for the food cell
pub(crate) const FOOD_STYLE: Style = Style::new().bg(Color::Rgb(0xEF, 0xA8, 0xB1));

/// Default style for empty cells with an even index
pub(crate) const BACKGROUND_EVEN_STYLE: Style = Style::new().bg(Color::Rgb(0xFE, 0xFE, 0xFE));

/// Default style for empty cells with an odd index
pub(crate) const BACKGROUND_ODD_STYLE: Style = Style::new().bg(Color::Rgb(0xF8, 0xF8, 0xF8));

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Environment variable holding the log filter directives
pub(crate) const LOG_FILTER_VAR: &str = "GRIDSNAKE_LOG";
