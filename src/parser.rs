use crate::{Position, Token, TokenKind};

/// Produce the token stream for one source file.
///
/// Line-based scan for Python-style sources: identifier runs become name
/// tokens, `#` to end of line becomes a single comment token (marker
/// included), and string literal contents are skipped so prose inside
/// strings is never reported as an identifier. Lines are 1-based, columns
/// 0-based, both counted in characters.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        scan_line(line, line_idx + 1, &mut tokens);
    }
    tokens
}

fn scan_line(line: &str, line_no: usize, out: &mut Vec<Token>) {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '#' {
            let text: String = chars[i..].iter().collect();
            out.push(Token::new(
                TokenKind::Comment,
                text,
                Position::new(line_no, i),
            ));
            return;
        }

        if ch == '"' || ch == '\'' {
            i = skip_string(&chars, i);
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            out.push(Token::new(
                TokenKind::Name,
                text,
                Position::new(line_no, start),
            ));
            continue;
        }

        i += 1;
    }
}

/// Advance past a string literal opened at `open`, honoring backslash
/// escapes. Unterminated strings swallow the rest of the line.
fn skip_string(chars: &[char], open: usize) -> usize {
    let quote = chars[open];
    let mut i = open + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    i
}
