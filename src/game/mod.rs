mod creature;
mod direction;
mod food;
mod grid;
pub(crate) use self::creature::Creature;
pub(crate) use self::food::Food;
pub(crate) use self::grid::{Cell, Grid};
use self::direction::Direction;
use crate::command::Command;
use crate::consts;
use log::{debug, info, trace};
use rand::Rng;
use ratatui::style::Color;
use std::collections::HashSet;
use std::num::NonZeroU32;
use std::ops::ControlFlow;

/// Something that occupies cells of the grid and is painted in a single color
pub(crate) trait Drawable {
    fn color(&self) -> Color;
    fn cells(&self) -> impl Iterator<Item = Cell> + '_;
}

/// Settings fixed for the lifetime of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameConfig {
    pub(crate) grid: Grid,
    pub(crate) ticks_per_second: NonZeroU32,
    /// If true, food is never placed underneath the creature
    pub(crate) food_avoids_creature: bool,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid: consts::GRID,
            ticks_per_second: consts::TICKS_PER_SECOND,
            food_avoids_creature: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: GameConfig,
    creature: Creature,
    food: Food,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: GameConfig) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: GameConfig, mut rng: R) -> Game<R> {
        let creature = Creature::new(config.grid.center());
        let food = Food::new(&mut rng, config.grid);
        Game {
            rng,
            config,
            creature,
            food,
        }
    }

    /// Advance the game by one step: move the creature, let it eat any food
    /// under its head, and start over if it has run into itself.
    pub(crate) fn tick(&mut self) -> Tick {
        self.creature.advance(self.config.grid);
        let mut outcome = Tick::Moved;
        if self.creature.head() == self.food.position() {
            self.creature.grow();
            let target = self.creature.target_len();
            debug!("Food eaten; creature will grow to {target} cells");
            self.place_food();
            outcome = Tick::Ate;
        }
        if self.creature.collides_with_self() {
            let length = self.creature.len();
            info!("Creature ran into itself at length {length}; starting over");
            self.creature.reset();
            outcome = Tick::Collided;
        }
        outcome
    }

    fn place_food(&mut self) {
        let occupied = if self.config.food_avoids_creature {
            self.creature.cells().collect()
        } else {
            HashSet::new()
        };
        self.food.relocate(&mut self.rng, self.config.grid, &occupied);
        let Cell { x, y } = self.food.position();
        trace!("Food placed at ({x}, {y})");
    }
}

impl<R> Game<R> {
    /// Act on a command from the player.  Returns `Break` if the player wants
    /// to quit.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Quit => return ControlFlow::Break(()),
            Command::Up => self.creature.request_direction(Direction::Up),
            Command::Down => self.creature.request_direction(Direction::Down),
            Command::Left => self.creature.request_direction(Direction::Left),
            Command::Right => self.creature.request_direction(Direction::Right),
        }
        ControlFlow::Continue(())
    }

    /// Return what needs to be drawn after the latest tick.  If `clear` is
    /// true, the board should be wiped before drawing.
    pub(crate) fn scene(&self, clear: bool) -> Scene<'_> {
        Scene {
            creature: &self.creature,
            food: &self.food,
            vacated: self.creature.last_removed(),
            clear,
        }
    }

    pub(crate) fn config(&self) -> GameConfig {
        self.config
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The creature moved without incident
    Moved,
    /// The creature ate the food and will grow
    Ate,
    /// The creature ran into itself and has been reset
    Collided,
}

impl Tick {
    /// Does the board need wiping after this tick?
    pub(crate) fn resets_board(self) -> bool {
        self == Tick::Collided
    }
}

/// The renderable state of a game at the end of a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scene<'a> {
    pub(crate) creature: &'a Creature,
    pub(crate) food: &'a Food,
    /// A cell the creature's tail just left, which should be erased
    pub(crate) vacated: Option<Cell>,
    /// Whether to wipe the whole board before drawing
    pub(crate) clear: bool,
}
