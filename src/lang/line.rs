use super::LineNumber;

/// One numbered entry of a program: `<line number> <statement text>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    /// Leading and trailing whitespace of `text` is not kept.
    /// Line breaks inside it become spaces; a statement is one line.
    pub fn new(number: LineNumber, text: &str) -> Line {
        let text = text.trim().replace(|c: char| c == '\n' || c == '\r', " ");
        Line { number, text }
    }

    /// Typed input: `"<digits> <text>"` with a single space after the
    /// number.
    pub fn from_input(s: &str) -> Option<Line> {
        let (number, text) = s.trim().split_once(' ')?;
        let number = line_number(number)?;
        if text.trim().is_empty() {
            return None;
        }
        Some(Line::new(number, text))
    }

    /// Splits a program file entry, `"<digits><whitespace><text>"`.
    /// Anything else, including a number with no text, is `None`.
    pub fn from_entry(s: &str) -> Option<Line> {
        let s = s.trim();
        let split = s.find(char::is_whitespace)?;
        let (number, text) = s.split_at(split);
        let number = line_number(number)?;
        let text = text.trim_start();
        if text.is_empty() {
            return None;
        }
        Some(Line::new(number, text))
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

/// Parses a token made only of ASCII digits. Signs, blanks and
/// values too large for a `LineNumber` are rejected.
pub fn line_number(token: &str) -> Option<LineNumber> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<LineNumber>().ok()
}
