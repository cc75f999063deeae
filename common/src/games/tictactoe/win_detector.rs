use super::board::Board;
use super::types::{Line, Mark, Position};

const fn line(cells: [(usize, usize); 3]) -> Line {
    [
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ]
}

/// Rows, then columns, then the main diagonal and the anti-diagonal.
pub const LINES: [Line; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(2, 0), (1, 1), (0, 2)]),
];

pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|cells| cells.iter().all(|&pos| board.get(pos) == Some(mark)))
        .copied()
}

pub fn has_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::Human, Mark::Bot]
        .into_iter()
        .find(|&mark| has_winner(board, mark))
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some()
}
