use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::Drawable;
use crate::consts;
use ratatui::style::Color;
use std::collections::VecDeque;

/// The creature the player steers around the grid
///
/// All positions are in pixels relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Creature {
    /// The cells occupied by the creature, with the head at the front and the
    /// tail at the back
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the creature will move on its next step
    pub(super) direction: Direction,

    /// A turn requested since the last step, applied at the start of the next
    /// one
    pub(super) pending_direction: Option<Direction>,

    /// The length the body grows to
    pub(super) target_len: usize,

    /// The tail cell vacated by the most recent step, if any
    pub(super) last_removed: Option<Cell>,

    /// Where the creature starts out, and where it returns to on a reset
    start: Cell,
}

impl Creature {
    /// Create a one-cell creature at `start`, facing right
    pub(crate) fn new(start: Cell) -> Creature {
        Creature {
            body: VecDeque::from([start]),
            direction: Direction::Right,
            pending_direction: None,
            target_len: 1,
            last_removed: None,
            start,
        }
    }

    /// Return the position of the creature's head
    pub(crate) fn head(&self) -> Cell {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn target_len(&self) -> usize {
        self.target_len
    }

    pub(crate) fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    /// Ask the creature to turn to face `direction` on its next step.  A
    /// request to turn around onto itself is ignored.
    pub(super) fn request_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending_direction = Some(direction);
        }
    }

    /// Move the creature forwards one cell within `grid`, turning first if a
    /// turn is pending.  If this takes the body past its target length, the
    /// tail cell is dropped and recorded in `last_removed`.
    pub(super) fn advance(&mut self, grid: Grid) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        let head = self.direction.advance(self.head(), grid);
        self.body.push_front(head);
        self.last_removed = if self.body.len() > self.target_len {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Extend the creature's target length in response to eating food
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Has the head run into the rest of the body?
    pub(super) fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Return the creature to its starting state
    pub(super) fn reset(&mut self) {
        *self = Creature::new(self.start);
    }
}

impl Drawable for Creature {
    fn color(&self) -> Color {
        consts::CREATURE_COLOR
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}
