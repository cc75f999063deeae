use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Position};

/// The bot maximizes, the human minimizes.
pub const MAXIMIZER: Mark = Mark::Bot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` for a leaf evaluation where no move was made.
    pub position: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(board: &Board) -> Self {
        Self {
            position: None,
            score: score(board),
        }
    }
}

/// +1 if the bot holds a line, -1 if the human does, 0 otherwise.
pub fn score(board: &Board) -> i32 {
    if board.has_winner(Mark::Bot) {
        1
    } else if board.has_winner(Mark::Human) {
        -1
    } else {
        0
    }
}

/// Full-width minimax without pruning. Every tentative placement is undone
/// before moving on, so `board` is returned exactly as it was given.
/// Ties go to the first cell in row-major order.
pub fn minimax(board: &mut Board, depth: usize, mark: Mark) -> SearchResult {
    let Some(next_mark) = mark.opponent() else {
        panic!("minimax needs a player mark, got {:?}", mark);
    };

    let moves = board.empty_cells();
    if depth == 0 || board.is_terminal() || moves.is_empty() {
        return SearchResult::leaf(board);
    }

    let mut best: Option<SearchResult> = None;

    for pos in moves {
        board.apply_move(pos.row, pos.col, mark);
        let child = minimax(board, depth - 1, next_mark);
        board.undo_move(pos);

        let candidate = SearchResult {
            position: Some(pos),
            score: child.score,
        };

        let improves = match best {
            None => true,
            Some(current) if mark == MAXIMIZER => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };

        if improves {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| SearchResult::leaf(board))
}

/// Picks the bot's move. The opening move on an empty board is random, since
/// every first move is equally strong; after that the search always runs to
/// the end of the game. Returns `None` when the game is already decided or
/// the board is full.
pub fn choose_opponent_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() || board.is_terminal() {
        return None;
    }

    if board.is_empty() {
        let pos = rng.choose(&available_moves).copied();
        if let Some(pos) = pos {
            debug_log!("Bot opening move at {}", pos);
        }
        return pos;
    }

    let mut board = *board;
    let depth = available_moves.len();
    let result = minimax(&mut board, depth, MAXIMIZER);

    match result.position {
        Some(pos) => debug_log!("Bot searched depth {} and chose {} (score {})", depth, pos, result.score),
        None => debug_log!("Bot search at depth {} found no move", depth),
    }

    result.position
}
