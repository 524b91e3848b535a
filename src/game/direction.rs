use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit `(dx, dy)` vector for a single step in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the cell one step from `cell` in this direction, wrapping each
    /// axis around the edges of `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let (dx, dy) = self.delta();
        let step = i32::from(grid.cell_size());
        Cell::new(
            wrap(cell.x, dx * step, grid.width()),
            wrap(cell.y, dy * step, grid.height()),
        )
    }
}

fn wrap(coord: u16, delta: i32, extent: u16) -> u16 {
    let moved = (i32::from(coord) + delta).rem_euclid(i32::from(extent));
    u16::try_from(moved).expect("wrapped coordinate should be less than the extent")
}
