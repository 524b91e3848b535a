use crate::consts;
use crate::game::{Cell, Drawable, Grid, Scene};
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
    Terminal,
};
use std::io;

/// Something that can display the state of a game
pub(crate) trait Renderer {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()>;
}

/// The picture of the grid built up over successive scenes.  Cells stay
/// painted until they are explicitly erased or the board is cleared.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    grid: Grid,
    /// Colors of the cells in row-major order
    colors: Vec<Color>,
    /// Length of the creature in the most recent scene
    length: usize,
}

impl Board {
    pub(crate) fn new(grid: Grid) -> Board {
        let qty = usize::from(grid.columns()) * usize::from(grid.rows());
        Board {
            grid,
            colors: vec![consts::BACKGROUND_COLOR; qty],
            length: 0,
        }
    }

    /// Update the picture with the contents of `scene`
    pub(crate) fn apply(&mut self, scene: &Scene<'_>) {
        if scene.clear {
            self.colors.fill(consts::BACKGROUND_COLOR);
        }
        if let Some(cell) = scene.vacated {
            self.set(cell, consts::BACKGROUND_COLOR);
        }
        self.paint(scene.creature);
        self.paint(scene.food);
        self.length = scene.creature.len();
    }

    fn paint<D: Drawable>(&mut self, item: &D) {
        let color = item.color();
        for cell in item.cells() {
            self.set(cell, color);
        }
    }

    fn set(&mut self, cell: Cell, color: Color) {
        if let Some(i) = self.index(cell) {
            self.colors[i] = color;
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let (column, row) = self.grid.index_of(cell)?;
        Some(usize::from(row) * usize::from(self.grid.columns()) + usize::from(column))
    }

    /// The color of the cell at the given column & row
    pub(crate) fn color_at(&self, column: u16, row: u16) -> Color {
        let i = usize::from(row) * usize::from(self.grid.columns()) + usize::from(column);
        self.colors.get(i).copied().unwrap_or(consts::BACKGROUND_COLOR)
    }

    /// The size of the area that the board is drawn in, including the status
    /// bar
    pub(crate) fn display_size(&self) -> Size {
        Size {
            width: self.grid.columns().saturating_mul(consts::CELL_WIDTH),
            height: self.grid.rows().saturating_add(1),
        }
    }
}

impl Widget for &Board {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.display_size());
        let [status_area, grid_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(format!(" Length: {}", self.length), consts::STATUS_BAR_STYLE)
            .render(status_area, buf);
        for row in 0..self.grid.rows() {
            let Some(y) = grid_area.y.checked_add(row) else {
                break;
            };
            for column in 0..self.grid.columns() {
                let color = self.color_at(column, row);
                let symbol = if color == consts::BACKGROUND_COLOR {
                    ' '
                } else {
                    consts::CELL_SYMBOL
                };
                let style = Style::new().fg(color).bg(consts::BACKGROUND_COLOR);
                let Some(x0) = column
                    .checked_mul(consts::CELL_WIDTH)
                    .and_then(|x| grid_area.x.checked_add(x))
                else {
                    break;
                };
                for dx in 0..consts::CELL_WIDTH {
                    let Some(x) = x0.checked_add(dx) else {
                        break;
                    };
                    if !grid_area.contains(Position::new(x, y)) {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(symbol).set_style(style);
                    }
                }
            }
        }
    }
}

/// Draws games in a terminal
#[derive(Debug)]
pub(crate) struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    board: Board,
}

impl<B: Backend> TerminalRenderer<B> {
    pub(crate) fn new(terminal: Terminal<B>, grid: Grid) -> Self {
        TerminalRenderer {
            terminal,
            board: Board::new(grid),
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        self.board.apply(scene);
        let board = &self.board;
        self.terminal.draw(|frame| frame.render_widget(board, frame.area()))?;
        Ok(())
    }
}
