use super::types::{BOARD_SIZE, Line, Mark, Position};
use super::win_detector;

/// Fixed 3x3 grid. Turn order is not tracked here; see `TicTacToeGameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_move_legal(&self, row: usize, col: usize) -> bool {
        self.get(Position::new(row, col)) == Some(Mark::Empty)
    }

    /// Places `mark` if the cell is on the board and empty. Leaves the board
    /// untouched and returns false otherwise.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_move_legal(row, col) {
            return false;
        }
        self.cells[row][col] = mark;
        true
    }

    pub(crate) fn undo_move(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    /// Empty cells in row-major order. Search tie-breaking depends on this order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, marks) in self.cells.iter().enumerate() {
            for (col, &cell) in marks.iter().enumerate() {
                if cell == Mark::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == Mark::Empty))
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn has_winner(&self, mark: Mark) -> bool {
        win_detector::has_winner(self, mark)
    }

    /// True once either mark holds a full line. A full board with no line is
    /// not terminal by this predicate.
    pub fn is_terminal(&self) -> bool {
        win_detector::is_terminal(self)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<Line> {
        win_detector::winning_line(self, mark)
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}
