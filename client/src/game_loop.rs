use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayer, GameStatus, Mark, TicTacToeGameState};
use common::debug_log;

use crate::input::{Command, is_yes, parse_command};
use crate::render::{Glyphs, board_text};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWon => self.human_wins += 1,
            GameStatus::BotWon => self.bot_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.human_wins + self.bot_wins + self.draws
    }
}

enum Turn {
    Continue,
    Quit,
}

pub struct GameLoop<'a, R, W> {
    input: R,
    output: W,
    glyphs: Glyphs,
    rng: &'a mut SessionRng,
    state: TicTacToeGameState,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> GameLoop<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        first_player: FirstPlayer,
        glyphs: Glyphs,
        rng: &'a mut SessionRng,
    ) -> Self {
        Self {
            input,
            output,
            glyphs,
            rng,
            state: TicTacToeGameState::new(first_player),
            summary: SessionSummary::default(),
        }
    }

    /// Plays games until the player quits, declines a restart or input ends.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        loop {
            if let Turn::Quit = self.play_game()? {
                break;
            }

            let status = self.state.status();
            self.summary.record(status);
            self.show_result(status)?;

            write!(self.output, "Restart? [y/N] ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(line) if is_yes(&line) => self.state.restart().map_err(io::Error::other)?,
                _ => break,
            }
        }

        writeln!(
            self.output,
            "Games: {}  You: {}  Bot: {}  Draws: {}",
            self.summary.games(),
            self.summary.human_wins,
            self.summary.bot_wins,
            self.summary.draws
        )?;
        Ok(self.summary)
    }

    fn play_game(&mut self) -> io::Result<Turn> {
        debug_log!("New game, {:?} moves first", self.state.first_player());

        while !self.state.is_over() {
            if self.state.current_mark() == Mark::Bot {
                self.play_bot()?;
                continue;
            }

            self.show_board()?;
            write!(self.output, "Your move (row col, q to quit): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Turn::Quit);
            };

            let pos = match parse_command(&line) {
                Ok(Command::Move(pos)) => pos,
                Ok(Command::Quit) => return Ok(Turn::Quit),
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            if let Err(message) = self.state.place_mark(Mark::Human, pos) {
                writeln!(self.output, "Illegal move: {}", message)?;
                continue;
            }
            debug_log!("Human played {}", pos);
        }

        Ok(Turn::Continue)
    }

    fn play_bot(&mut self) -> io::Result<()> {
        let pos = self.state.play_bot_turn(self.rng).map_err(io::Error::other)?;
        writeln!(self.output, "Bot plays {} {}", pos.row + 1, pos.col + 1)?;
        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        let text = board_text(self.state.board(), &self.glyphs, self.state.winning_line());
        write!(self.output, "\n{}", text)
    }

    fn show_result(&mut self, status: GameStatus) -> io::Result<()> {
        self.show_board()?;
        let message = match status {
            GameStatus::HumanWon => "You win!",
            GameStatus::BotWon => "You lose!",
            GameStatus::Draw => "Draw!",
            GameStatus::InProgress => return Ok(()),
        };
        debug_log!("Game over: {:?}", status);
        writeln!(self.output, "{}", message)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
