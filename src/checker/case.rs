use crate::Position;

/// How a word-like string should be split into spell-checkable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Url,
    Snake,
    Camel,
}

/// Classify a word so the right splitter can be chosen.
///
/// URLs are never split (or checked). ALL_CAPS identifiers are routed
/// through the snake splitter, which performs no case-based splitting,
/// so acronyms like `HTTP2` are checked as a single word.
pub fn detect_case(word: &str) -> WordCase {
    if word.starts_with("http") {
        return WordCase::Url;
    }
    // leading underscores don't make a name snake case
    if word.trim_start_matches('_').contains('_') {
        return WordCase::Snake;
    }
    let has_cased = word.chars().any(|c| c.is_uppercase() || c.is_lowercase());
    if has_cased && !word.chars().any(|c| c.is_lowercase()) {
        return WordCase::Snake;
    }
    WordCase::Camel
}

/// A single spell-checkable unit produced by splitting, positioned at the
/// column where its first character appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubWord {
    pub text: String,
    pub position: Position,
}

/// Split a snake-case word into sub-words.
///
/// Underscores (and any other non-alphanumeric character) are treated
/// purely as separators; case is never used to split further.
pub fn split_snake_case(word: &str, start: Position) -> SnakeSplit<'_> {
    SnakeSplit {
        chars: word.chars(),
        line: start.line,
        index: start.column,
        start: start.column,
        buffer: String::new(),
        done: false,
    }
}

pub struct SnakeSplit<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    index: usize,
    start: usize,
    buffer: String,
    done: bool,
}

impl Iterator for SnakeSplit<'_> {
    type Item = SubWord;

    fn next(&mut self) -> Option<SubWord> {
        if self.done {
            return None;
        }
        while let Some(ch) = self.chars.next() {
            self.index += 1;
            if ch.is_ascii_alphanumeric() {
                self.buffer.push(ch);
                continue;
            }
            let pending = self.take_buffer();
            self.start = self.index;
            if pending.is_some() {
                return pending;
            }
        }
        self.done = true;
        self.take_buffer()
    }
}

impl SnakeSplit<'_> {
    fn take_buffer(&mut self) -> Option<SubWord> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(SubWord {
            text: std::mem::take(&mut self.buffer),
            position: Position::new(self.line, self.start),
        })
    }
}

/// Split a camel-case word into sub-words.
///
/// Lowercase letters, digits and apostrophes extend the current buffer.
/// An uppercase letter flushes the pending buffer and starts a fresh
/// one-character buffer at its own column, so `fooBar` yields `foo`, `Bar`
/// and a leading uppercase letter never produces an empty sub-word.
pub fn split_camel_case(word: &str, start: Position) -> CamelSplit<'_> {
    CamelSplit {
        chars: word.chars(),
        line: start.line,
        index: start.column,
        start: start.column,
        buffer: String::new(),
        done: false,
    }
}

pub struct CamelSplit<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    index: usize,
    start: usize,
    buffer: String,
    done: bool,
}

impl Iterator for CamelSplit<'_> {
    type Item = SubWord;

    fn next(&mut self) -> Option<SubWord> {
        if self.done {
            return None;
        }
        while let Some(ch) = self.chars.next() {
            self.index += 1;
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '\'' {
                self.buffer.push(ch);
                continue;
            }
            let pending = self.take_buffer();
            if ch.is_ascii_uppercase() {
                self.buffer.push(ch);
                self.start = self.index - 1;
            } else {
                self.start = self.index;
            }
            if pending.is_some() {
                return pending;
            }
        }
        self.done = true;
        self.take_buffer()
    }
}

impl CamelSplit<'_> {
    fn take_buffer(&mut self) -> Option<SubWord> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(SubWord {
            text: std::mem::take(&mut self.buffer),
            position: Position::new(self.line, self.start),
        })
    }
}
