//! Prompt line parsing.

use geo_relay_server::domain::Coordinates;

use crate::error::InputError;

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Report this location
    Send(Coordinates),
    /// Leave
    Quit,
    /// Blank line
    Empty,
}

/// Parse `lat lon`, `lat,lon` or `/quit`
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }
    if line == "/quit" || line == "/exit" {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [latitude, longitude] = parts.as_slice() else {
        return Err(InputError::WrongArity);
    };

    let parse = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotANumber(value.to_string()))
    };
    Ok(Command::Send(Coordinates::new(
        parse(*latitude)?,
        parse(*longitude)?,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_space_and_comma() {
        // テスト項目: 空白区切りとカンマ区切りの両方を受け付ける
        assert_eq!(
            parse_line("35.68 139.76"),
            Ok(Command::Send(Coordinates::new(35.68, 139.76)))
        );
        assert_eq!(
            parse_line(" -33.9, 151.2 "),
            Ok(Command::Send(Coordinates::new(-33.9, 151.2)))
        );
    }

    #[test]
    fn test_parse_line_commands() {
        // テスト項目: 空行と終了コマンドを認識する
        assert_eq!(parse_line("   "), Ok(Command::Empty));
        assert_eq!(parse_line("/quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_line_errors() {
        // テスト項目: 不正な入力はエラーになり、送信されない
        assert_eq!(parse_line("35.6"), Err(InputError::WrongArity));
        assert_eq!(parse_line("1 2 3"), Err(InputError::WrongArity));
        assert_eq!(
            parse_line("north 139"),
            Err(InputError::NotANumber("north".to_string()))
        );
        assert_eq!(
            parse_line("NaN 0"),
            Err(InputError::NotANumber("NaN".to_string()))
        );
    }
}
