//! Assorted constants & hard-coded configuration
use crate::game::Grid;
use ratatui::style::{Color, Modifier, Style};
use std::num::NonZeroU32;

/// Width of the playing field in pixels
pub(crate) const SCREEN_WIDTH: u16 = 640;

/// Height of the playing field in pixels
pub(crate) const SCREEN_HEIGHT: u16 = 480;

/// Side length of a single grid cell in pixels
pub(crate) const GRID_SIZE: u16 = 20;

/// The playing field
pub(crate) const GRID: Grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);

/// Default number of times per second that the creature moves
pub(crate) const TICKS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(7) {
    Some(n) => n,
    None => panic!("TICKS_PER_SECOND should be nonzero"),
};

/// Title shown for the terminal window
pub(crate) const WINDOW_TITLE: &str = "Snake";

/// Color of empty cells
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);

/// Color of the creature's body
pub(crate) const CREATURE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Color of the food
pub(crate) const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Glyph used to fill occupied cells
pub(crate) const CELL_SYMBOL: char = '█';

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Style for the status bar above the board
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
