pub mod case;
pub mod dictionary;

use crate::config::Target;
use crate::{Diagnostic, RuleCode, Token, TokenKind};
use case::{detect_case, split_camel_case, split_snake_case, SubWord, WordCase};
use dictionary::DictionaryIndex;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Inline lint-suppression annotations like `# noqa: WPS110`; their
    // rule-code digits must not be reported as misspelt words.
    static ref NOQA_REGEX: Regex = Regex::new(r"#\s*noqa:\s*\D+\d+").unwrap();
}

/// The first word of a comment body that marks the whole comment as a
/// lint pragma rather than prose.
const PRAGMA_KEYWORD: &str = "noqa:";

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("no rule code for token kind {0:?}")]
    UnsupportedTokenKind(TokenKind),
}

/// Map a token kind to its diagnostic rule code.
///
/// Only names and comments carry codes; asking for anything else is an
/// internal invariant violation, since eligibility filtering must have
/// excluded every other kind already.
pub fn rule_code(kind: TokenKind) -> Result<RuleCode, CheckError> {
    match kind {
        TokenKind::Comment => Ok(RuleCode::Sc100),
        TokenKind::Name => Ok(RuleCode::Sc200),
        other => Err(CheckError::UnsupportedTokenKind(other)),
    }
}

/// Checks one token stream against an immutable dictionary index.
///
/// Holds no per-file state of its own, so a single instance can be reused
/// across files, and the index can be shared read-only between instances.
pub struct SpellChecker {
    index: DictionaryIndex,
    check_names: bool,
    check_comments: bool,
}

impl SpellChecker {
    pub fn new(index: DictionaryIndex, targets: &[Target]) -> Self {
        Self {
            index,
            check_names: targets.contains(&Target::Names),
            check_comments: targets.contains(&Target::Comments),
        }
    }

    /// Check every token in a stream, collecting diagnostics eagerly.
    pub fn check(&self, tokens: &[Token]) -> Result<Vec<Diagnostic>, CheckError> {
        let mut diagnostics = Vec::new();
        for token in tokens {
            diagnostics.extend(self.check_token(token)?);
        }
        Ok(diagnostics)
    }

    /// Lazily check a token stream, yielding diagnostics one at a time.
    pub fn diagnostics<I>(&self, tokens: I) -> Diagnostics<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Token>,
    {
        Diagnostics {
            checker: self,
            tokens: tokens.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }

    /// Check a single token, returning diagnostics in left-to-right order.
    pub fn check_token(&self, token: &Token) -> Result<Vec<Diagnostic>, CheckError> {
        let text = match token.kind {
            TokenKind::Name if self.check_names => token.text.clone(),
            TokenKind::Comment if self.check_comments && is_checkable_comment(&token.text) => {
                // strip `noqa: [code]` annotations so they aren't checked
                NOQA_REGEX
                    .replace_all(token.text.trim_start_matches('#'), "")
                    .into_owned()
            }
            _ => return Ok(Vec::new()),
        };

        let code = rule_code(token.kind)?;
        // identifiers can't carry punctuation, comments can
        let allow_symbols = token.kind == TokenKind::Comment;

        let mut diagnostics = Vec::new();
        for chunk in text.split(' ') {
            match detect_case(chunk) {
                WordCase::Url => continue,
                WordCase::Snake => self.detect_errors(
                    split_snake_case(chunk, token.start),
                    code,
                    allow_symbols,
                    &mut diagnostics,
                ),
                WordCase::Camel => self.detect_errors(
                    split_camel_case(chunk, token.start),
                    code,
                    allow_symbols,
                    &mut diagnostics,
                ),
            }
        }
        Ok(diagnostics)
    }

    fn detect_errors(
        &self,
        sub_words: impl Iterator<Item = SubWord>,
        code: RuleCode,
        allow_symbols: bool,
        out: &mut Vec<Diagnostic>,
    ) {
        for sub_word in sub_words {
            if self.index.contains(&sub_word.text, allow_symbols) {
                continue;
            }
            out.push(Diagnostic {
                line: sub_word.position.line,
                column: sub_word.position.column,
                code,
                message: format!("{} Possibly misspelt word: '{}'", code, sub_word.text),
            });
        }
    }
}

/// A comment is worth checking when it still has prose after the leading
/// `#` markers and is not a whole-line lint pragma.
fn is_checkable_comment(text: &str) -> bool {
    let body = text.trim_start_matches('#').trim();
    !body.is_empty() && body.split_whitespace().next() != Some(PRAGMA_KEYWORD)
}

/// Streaming adapter over a token iterator, buffering no more than the
/// diagnostics of the current token.
pub struct Diagnostics<'c, I> {
    checker: &'c SpellChecker,
    tokens: I,
    pending: std::vec::IntoIter<Diagnostic>,
}

impl<I> Iterator for Diagnostics<'_, I>
where
    I: Iterator<Item = Token>,
{
    type Item = Result<Diagnostic, CheckError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(diagnostic) = self.pending.next() {
                return Some(Ok(diagnostic));
            }
            let token = self.tokens.next()?;
            match self.checker.check_token(&token) {
                Ok(batch) => self.pending = batch.into_iter(),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
