use super::{ast::Statement, line::line_number};

/// Decides what one line of program text does.
///
/// Keywords are matched case-insensitively at the start of the text,
/// so `PRINTER` is a `PRINT` of `ER`. `END` must stand alone.
pub fn parse(statement: &str) -> Statement {
    let statement = statement.trim();
    if let Some(arg) = keyword(statement, "PRINT") {
        return print(arg.trim());
    }
    if let Some(target) = keyword(statement, "GOTO") {
        let target = target.trim();
        return match line_number(target) {
            Some(number) => Statement::Goto(number),
            None => Statement::InvalidGoto(target.to_string()),
        };
    }
    if statement.eq_ignore_ascii_case("END") {
        return Statement::End;
    }
    Statement::Unknown(statement.to_string())
}

fn keyword<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let head = s.get(..word.len())?;
    if head.eq_ignore_ascii_case(word) {
        Some(&s[word.len()..])
    } else {
        None
    }
}

fn print(arg: &str) -> Statement {
    if arg.starts_with('"') && arg.ends_with('"') {
        // A lone `"` is both the opening and the closing quote.
        let text = if arg.len() > 1 { &arg[1..arg.len() - 1] } else { "" };
        return literal(text);
    }
    if arg.ends_with(';') {
        if arg.starts_with('"') {
            // Drop the opening quote and the final two characters,
            // normally the closing quote and the semicolon.
            let mut inner = arg[1..].chars();
            inner.next_back();
            inner.next_back();
            return literal(inner.as_str());
        }
        return literal(arg);
    }
    Statement::PrintRaw(arg.to_string())
}

fn literal(text: &str) -> Statement {
    Statement::PrintLiteral {
        text: text.to_string(),
        suppress_newline: true,
    }
}
