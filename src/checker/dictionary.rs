use std::collections::HashSet;

/// Immutable, case-insensitive index of known words.
///
/// Built once per run from the configured dictionaries and allow-lists.
/// Alongside the plain `words` set it keeps a derived `no_symbols` set with
/// apostrophes stripped, used when checking identifiers (which cannot carry
/// punctuation). The derived set is never edited independently.
pub struct DictionaryIndex {
    words: HashSet<String>,
    no_symbols: HashSet<String>,
}

impl DictionaryIndex {
    /// Build the index from newline-separated word lists.
    pub fn new<I, S>(word_lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        for list in word_lists {
            for word in list.as_ref().lines() {
                let word = word.trim();
                if !word.is_empty() {
                    words.insert(word.to_lowercase());
                }
            }
        }

        let no_symbols = words.iter().map(|word| strip_symbols(word)).collect();

        Self { words, no_symbols }
    }

    /// Check whether a word is known.
    ///
    /// The word is lowercased and stripped of one surrounding quote
    /// character on each side before lookup. With `allow_symbols` the full
    /// word set is consulted (comments), otherwise the apostrophe-stripped
    /// set (names). Anything that parses as a number is always known.
    pub fn contains(&self, word: &str, allow_symbols: bool) -> bool {
        if word.parse::<f64>().is_ok() {
            return true;
        }

        const QUOTES: &[char] = &['\'', '"'];
        let lowered = word.to_lowercase();
        let mut test = lowered.as_str();
        if let Some(rest) = test.strip_prefix(QUOTES) {
            test = rest;
        }
        if let Some(rest) = test.strip_suffix(QUOTES) {
            test = rest;
        }

        if allow_symbols {
            self.words.contains(test)
        } else {
            self.no_symbols.contains(test)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A trailing `'s` is removed entirely; any other apostrophe is deleted.
fn strip_symbols(word: &str) -> String {
    match word.strip_suffix("'s") {
        Some(stem) => stem.to_string(),
        None => word.replace('\'', ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &str) -> DictionaryIndex {
        DictionaryIndex::new([words])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let idx = index("hello\nworld\n");
        assert!(idx.contains("Hello", true));
        assert!(idx.contains("WORLD", false));
        assert!(!idx.contains("missing", true));
    }

    #[test]
    fn test_surrounding_quotes_are_stripped() {
        let idx = index("hello\n");
        assert!(idx.contains("'hello'", true));
        assert!(idx.contains("\"hello\"", true));
    }

    #[test]
    fn test_numbers_are_always_known() {
        let idx = index("hello\n");
        assert!(idx.contains("42", true));
        assert!(idx.contains("3.14", false));
        assert!(idx.contains("1e5", true));
        assert!(!idx.contains("4two", true));
    }

    #[test]
    fn test_no_symbols_strips_apostrophes() {
        let idx = index("don't\ncat's\n");
        // names carry no punctuation, so the stripped set is consulted
        assert!(idx.contains("dont", false));
        assert!(idx.contains("cat", false));
        // comments keep the original forms
        assert!(idx.contains("don't", true));
        assert!(!idx.contains("dont", true));
    }

    #[test]
    fn test_trailing_possessive_is_removed_not_replaced() {
        let idx = index("cat's\n");
        assert!(!idx.contains("cats", false));
        assert!(idx.contains("cat", false));
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let idx = index("hello\n\n  world  \n");
        assert_eq!(idx.len(), 2);
        assert!(idx.contains("world", true));
    }

    #[test]
    fn test_multiple_lists_are_unioned() {
        let idx = DictionaryIndex::new(["alpha\n", "beta\ngamma\n"]);
        assert!(idx.contains("alpha", true));
        assert!(idx.contains("gamma", true));
        assert_eq!(idx.len(), 3);
    }
}
