use super::LineNumber;

/// A statement decided once from its text, then matched by the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Text from a quoted `PRINT` or one ending in `;`.
    PrintLiteral { text: String, suppress_newline: bool },
    /// Unquoted `PRINT` text, followed by a newline.
    PrintRaw(String),
    Goto(LineNumber),
    /// `GOTO` whose target is not a line number.
    InvalidGoto(String),
    End,
    Unknown(String),
}
