use super::grid::{Cell, Grid};
use super::Drawable;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::style::Color;
use std::collections::HashSet;

/// A single piece of food on the grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Cell,
}

impl Food {
    /// Create a piece of food at a random cell of `grid`
    pub(super) fn new<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Food {
        let mut food = Food {
            position: grid.center(),
        };
        food.relocate(rng, grid, &HashSet::new());
        food
    }

    #[cfg(test)]
    pub(crate) fn at(position: Cell) -> Food {
        Food { position }
    }

    pub(crate) fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a cell of `grid` chosen uniformly at random from those
    /// not in `occupied`.  If every cell is occupied, any cell may be chosen.
    pub(super) fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        occupied: &HashSet<Cell>,
    ) {
        let choice = grid
            .cells()
            .filter(|c| !occupied.contains(c))
            .choose(rng)
            .or_else(|| grid.cells().choose(rng));
        if let Some(position) = choice {
            self.position = position;
        }
    }
}

impl Drawable for Food {
    fn color(&self) -> Color {
        consts::FOOD_COLOR
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.position)
    }
}
