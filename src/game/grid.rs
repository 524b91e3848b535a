/// A grid-aligned position on the board, measured in pixels from the
/// top-left corner
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

/// The playing field: a `width` × `height` pixel area divided into square
/// cells of side `cell_size`.  Movement off any edge wraps around to the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if `cell_size` is zero or does not evenly divide both `width`
    /// and `height`.
    pub(crate) const fn new(width: u16, height: u16, cell_size: u16) -> Grid {
        assert!(cell_size > 0, "cell size must be nonzero");
        assert!(
            width >= cell_size && width % cell_size == 0,
            "grid width must be a nonzero multiple of the cell size"
        );
        assert!(
            height >= cell_size && height % cell_size == 0,
            "grid height must be a nonzero multiple of the cell size"
        );
        Grid {
            width,
            height,
            cell_size,
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> u16 {
        self.width / self.cell_size
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    /// The cell in the middle of the grid, where the creature starts out
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.align(self.width / 2), self.align(self.height / 2))
    }

    fn align(self, coord: u16) -> u16 {
        coord - coord % self.cell_size
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let step = usize::from(self.cell_size);
        (0..self.height)
            .step_by(step)
            .flat_map(move |y| (0..self.width).step_by(step).map(move |x| Cell::new(x, y)))
    }

    /// Return the `(column, row)` index of `cell`, or `None` if it does not
    /// lie on the grid
    pub(crate) fn index_of(self, cell: Cell) -> Option<(u16, u16)> {
        (cell.x < self.width
            && cell.y < self.height
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0)
            .then_some((cell.x / self.cell_size, cell.y / self.cell_size))
    }
}
