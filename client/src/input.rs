use common::games::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Quit,
}

/// Parses `row col` with 1-based numbers, separated by spaces or a comma.
/// Numbers past the board are passed through so the board can reject them.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if matches!(trimmed.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err("Enter a move as: row col (for example: 2 3)".to_string());
    };

    let row = parse_index(row)?;
    let col = parse_index(col)?;
    Ok(Command::Move(Position::new(row, col)))
}

fn parse_index(value: &str) -> Result<usize, String> {
    let number: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "Rows and columns are numbered from 1".to_string())
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(parse_command("2 3"), Ok(Command::Move(Position::new(1, 2))));
        assert_eq!(parse_command("  1   1 \n"), Ok(Command::Move(Position::new(0, 0))));
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_command("3,1"), Ok(Command::Move(Position::new(2, 0))));
        assert_eq!(parse_command("3, 2"), Ok(Command::Move(Position::new(2, 1))));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("0 1").is_err());
        assert!(parse_command("-1 1").is_err());
    }

    #[test]
    fn test_out_of_board_numbers_still_parse() {
        assert_eq!(parse_command("4 1"), Ok(Command::Move(Position::new(3, 0))));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
