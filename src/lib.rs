pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod parser;

pub use checker::dictionary::DictionaryIndex;
pub use checker::SpellChecker;
pub use config::{Config, Target};

use std::fmt;

/// Kind of a source token as reported by the tokenizer. Only names and
/// comments are ever spellchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Name,
    Comment,
    Other,
}

/// Absolute position in a source file: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
        }
    }
}

/// Stable rule codes: SC100 for comments, SC200 for names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCode {
    Sc100,
    Sc200,
}

impl RuleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::Sc100 => "SC100",
            RuleCode::Sc200 => "SC200",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub code: RuleCode,
    pub message: String,
}
