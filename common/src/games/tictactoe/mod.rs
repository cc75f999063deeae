mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MAXIMIZER, SearchResult, choose_opponent_move, minimax, score};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, FirstPlayer, GameStatus, Line, Mark, Position};
pub use win_detector::{LINES, check_win, has_winner, is_terminal, winning_line};
