use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::choose_opponent_move;
use super::types::{FirstPlayer, GameStatus, Line, Mark, Position};
use super::win_detector::check_win;

/// One game between the human and the bot. Unlike `Board`, this owns the
/// turn: a mark can only be placed by the side whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_player: FirstPlayer,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player: FirstPlayer) -> Self {
        Self {
            board: Board::new(),
            first_player,
            current_mark: first_player.mark(),
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(pos.row, pos.col, mark) {
            return Err("Cell is already marked".to_string());
        }

        self.last_move = Some(pos);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Position, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != Mark::Bot {
            return Err("Not the bot's turn".to_string());
        }

        let pos = choose_opponent_move(&self.board, rng)
            .ok_or_else(|| "Bot has no move to make".to_string())?;
        self.place_mark(Mark::Bot, pos)?;
        Ok(pos)
    }

    /// Clears the board for a new game. Refused while a game that has
    /// already started is still in progress.
    pub fn restart(&mut self) -> Result<(), String> {
        if self.status == GameStatus::InProgress && !self.board.is_empty() {
            return Err("Cannot restart while a game is in progress".to_string());
        }

        self.board.reset();
        self.current_mark = self.first_player.mark();
        self.status = GameStatus::InProgress;
        self.last_move = None;
        Ok(())
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::HumanWon => self.board.winning_line(Mark::Human),
            GameStatus::BotWon => self.board.winning_line(Mark::Bot),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::Human => Mark::Bot,
            _ => Mark::Human,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::Human => GameStatus::HumanWon,
                Mark::Bot => GameStatus::BotWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(Mark, usize, usize)]) {
        for &(mark, row, col) in moves {
            state.place_mark(mark, Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_new_game_human_moves_first() {
        let state = TicTacToeGameState::new(FirstPlayer::Human);
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.board().is_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        state.place_mark(Mark::Human, Position::new(0, 0)).unwrap();
        assert_eq!(state.current_mark(), Mark::Bot);
        assert_eq!(
            state.place_mark(Mark::Human, Position::new(1, 1)),
            Err("Not your turn".to_string())
        );
        state.place_mark(Mark::Bot, Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_rejected_move_keeps_turn_and_board() {
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        play(&mut state, &[(Mark::Human, 0, 0), (Mark::Bot, 1, 1)]);
        let before = *state.board();

        assert_eq!(
            state.place_mark(Mark::Human, Position::new(0, 0)),
            Err("Cell is already marked".to_string())
        );
        assert_eq!(
            state.place_mark(Mark::Human, Position::new(3, 0)),
            Err("Position out of bounds".to_string())
        );
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_mark(), Mark::Human);
    }

    #[test]
    fn test_human_win_is_detected() {
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        play(
            &mut state,
            &[
                (Mark::Human, 0, 0),
                (Mark::Bot, 1, 0),
                (Mark::Human, 0, 1),
                (Mark::Bot, 1, 1),
                (Mark::Human, 0, 2),
            ],
        );
        assert_eq!(state.status(), GameStatus::HumanWon);
        assert!(state.is_over());
        assert_eq!(
            state.winning_line(),
            Some([Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)])
        );
        assert_eq!(
            state.place_mark(Mark::Bot, Position::new(2, 2)),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        play(
            &mut state,
            &[
                (Mark::Human, 0, 0),
                (Mark::Bot, 0, 1),
                (Mark::Human, 0, 2),
                (Mark::Bot, 1, 1),
                (Mark::Human, 1, 0),
                (Mark::Bot, 1, 2),
                (Mark::Human, 2, 1),
                (Mark::Bot, 2, 0),
                (Mark::Human, 2, 2),
            ],
        );
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_bot_turn_after_human() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        assert!(state.play_bot_turn(&mut rng).is_err());

        state.place_mark(Mark::Human, Position::new(1, 1)).unwrap();
        let pos = state.play_bot_turn(&mut rng).unwrap();
        assert_eq!(state.board().get(pos), Some(Mark::Bot));
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.board().count(Mark::Human), 1);
        assert_eq!(state.board().count(Mark::Bot), 1);
    }

    #[test]
    fn test_bot_can_open() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(FirstPlayer::Bot);
        assert_eq!(state.current_mark(), Mark::Bot);
        assert!(state.place_mark(Mark::Human, Position::new(0, 0)).is_err());

        state.play_bot_turn(&mut rng).unwrap();
        assert_eq!(state.board().count(Mark::Bot), 1);
        assert_eq!(state.current_mark(), Mark::Human);
    }

    #[test]
    fn test_restart_only_when_no_game_in_progress() {
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);
        assert!(state.restart().is_ok());

        state.place_mark(Mark::Human, Position::new(0, 0)).unwrap();
        assert!(state.restart().is_err());
        assert_eq!(state.board().count(Mark::Human), 1);

        play(
            &mut state,
            &[
                (Mark::Bot, 1, 0),
                (Mark::Human, 0, 1),
                (Mark::Bot, 1, 1),
                (Mark::Human, 0, 2),
            ],
        );
        assert!(state.is_over());
        state.restart().unwrap();
        assert!(state.board().is_empty());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_full_game_against_bot_never_lost() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(FirstPlayer::Human);

        while !state.is_over() {
            let pos = state.board().empty_cells()[0];
            state.place_mark(Mark::Human, pos).unwrap();
            if state.is_over() {
                break;
            }
            state.play_bot_turn(&mut rng).unwrap();
        }

        assert_ne!(state.status(), GameStatus::HumanWon);
        let humans = state.board().count(Mark::Human);
        let bots = state.board().count(Mark::Bot);
        assert!(humans == bots || humans == bots + 1);
    }
}
