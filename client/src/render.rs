use common::games::tictactoe::{BOARD_SIZE, Board, Line, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub human: char,
    pub bot: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            human: Mark::Human.glyph(),
            bot: Mark::Bot.glyph(),
        }
    }
}

impl Glyphs {
    pub fn new(human: &str, bot: &str) -> Result<Self, String> {
        let human = human
            .chars()
            .next()
            .ok_or_else(|| "Human glyph is empty".to_string())?;
        let bot = bot
            .chars()
            .next()
            .ok_or_else(|| "Bot glyph is empty".to_string())?;
        Ok(Self { human, bot })
    }

    fn for_mark(&self, mark: Mark) -> char {
        match mark {
            Mark::Human => self.human,
            Mark::Bot => self.bot,
            Mark::Empty => ' ',
        }
    }
}

/// Text grid with 1-based labels. Cells of `highlight` are drawn in brackets.
pub fn board_text(board: &Board, glyphs: &Glyphs, highlight: Option<Line>) -> String {
    let mut text = String::from("   1   2   3\n");

    for (row, marks) in board.rows().iter().enumerate() {
        if row > 0 {
            text.push_str("  ---+---+---\n");
        }
        text.push_str(&(row + 1).to_string());
        text.push(' ');

        for (col, &mark) in marks.iter().enumerate() {
            let glyph = glyphs.for_mark(mark);
            let highlighted = highlight.is_some_and(|line| line.contains(&Position::new(row, col)));
            if highlighted {
                text.push('[');
                text.push(glyph);
                text.push(']');
            } else {
                text.push(' ');
                text.push(glyph);
                text.push(' ');
            }
            if col + 1 < BOARD_SIZE {
                text.push('|');
            }
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_text() {
        let text = board_text(&Board::new(), &Glyphs::default(), None);
        let expected = "   1   2   3\n\
                        1    |   |   \n\
                        \x20 ---+---+---\n\
                        2    |   |   \n\
                        \x20 ---+---+---\n\
                        3    |   |   \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_marks_and_highlight() {
        let mut board = Board::new();
        board.apply_move(0, 0, Mark::Bot);
        board.apply_move(0, 1, Mark::Bot);
        board.apply_move(0, 2, Mark::Bot);
        board.apply_move(1, 1, Mark::Human);
        let line = board.winning_line(Mark::Bot);

        let text = board_text(&board, &Glyphs::default(), line);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1 [O]|[O]|[O]");
        assert_eq!(lines[3], "2    | X |   ");
    }

    #[test]
    fn test_custom_glyphs() {
        let glyphs = Glyphs::new("A", "B").unwrap();
        let mut board = Board::new();
        board.apply_move(2, 2, Mark::Human);
        board.apply_move(2, 0, Mark::Bot);
        let text = board_text(&board, &glyphs, None);
        assert_eq!(text.lines().nth(5), Some("3  B |   | A "));
    }

    #[test]
    fn test_empty_glyph_is_an_error() {
        assert!(Glyphs::new("", "O").is_err());
    }
}
