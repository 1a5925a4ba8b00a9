use crate::checker::dictionary::DictionaryIndex;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of word lists, looked up by dictionary name.
///
/// Returns the raw newline-separated list; lowercasing and indexing are the
/// job of [`DictionaryIndex`].
pub trait DictionaryProvider {
    fn word_list(&self, name: &str) -> Result<String>;
}

/// The dictionaries shipped with the binary.
pub struct BundledProvider;

impl DictionaryProvider for BundledProvider {
    fn word_list(&self, name: &str) -> Result<String> {
        let data = match name {
            "en_US" => include_str!("wordlists/en_US.txt"),
            "python" => include_str!("wordlists/python.txt"),
            "technical" => include_str!("wordlists/technical.txt"),
            other => anyhow::bail!(
                "Unknown dictionary '{}'. Bundled dictionaries: en_US, python, technical",
                other
            ),
        };
        Ok(data.to_string())
    }
}

/// Reads `<dir>/<name>.txt`, falling back to the bundled dictionaries for
/// names not present in the directory.
pub struct DirProvider {
    root: PathBuf,
    fallback: BundledProvider,
}

impl DirProvider {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            fallback: BundledProvider,
        }
    }
}

impl DictionaryProvider for DirProvider {
    fn word_list(&self, name: &str) -> Result<String> {
        let path = self.root.join(format!("{}.txt", name));
        if path.exists() {
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read dictionary: {}", path.display()))
        } else {
            self.fallback.word_list(name)
        }
    }
}

/// Pick a provider for the run. A configured dictionary directory takes
/// precedence over the bundled lists.
pub fn provider_for(config: &Config) -> Box<dyn DictionaryProvider> {
    match &config.dictionary_dir {
        Some(dir) => Box::new(DirProvider::new(dir.clone())),
        None => Box::new(BundledProvider),
    }
}

/// Read an allow-list file if it exists. A missing file is not an error,
/// both the current and the legacy location are optional.
pub fn load_allow_list(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read allow-list: {}", path.display()))
}

/// Build the immutable word index for a run: every configured dictionary,
/// plus the legacy whitelist and the allowlist when present on disk.
pub fn build_index(config: &Config, provider: &dyn DictionaryProvider) -> Result<DictionaryIndex> {
    let mut word_lists = Vec::new();
    for name in &config.dictionaries {
        word_lists.push(provider.word_list(name)?);
    }
    if let Some(words) = load_allow_list(&config.whitelist)? {
        word_lists.push(words);
    }
    if let Some(words) = load_allow_list(&config.allowlist)? {
        word_lists.push(words);
    }
    Ok(DictionaryIndex::new(word_lists))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_dictionaries_load() {
        let provider = BundledProvider;
        assert!(provider.word_list("en_US").unwrap().contains("the"));
        assert!(provider.word_list("python").unwrap().contains("def"));
        assert!(provider.word_list("technical").unwrap().contains("async"));
        assert!(provider.word_list("klingon").is_err());
    }

    #[test]
    fn test_dir_provider_prefers_local_files() {
        let dir = tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("jargon.txt")).unwrap();
        writeln!(file, "frobnicate").unwrap();

        let provider = DirProvider::new(dir.path().to_path_buf());
        assert!(provider.word_list("jargon").unwrap().contains("frobnicate"));
        // names without a local file still resolve to the bundled set
        assert!(provider.word_list("python").unwrap().contains("def"));
    }

    #[test]
    fn test_missing_allow_list_is_not_an_error() {
        let dir = tempdir().unwrap();
        let loaded = load_allow_list(&dir.path().join("absent.txt")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_index_unions_dictionaries_and_allow_lists() {
        let dir = tempdir().unwrap();
        let allowlist = dir.path().join("allowlist.txt");
        let whitelist = dir.path().join("whitelist.txt");
        fs::write(&allowlist, "newword\n").unwrap();
        fs::write(&whitelist, "oldword\n").unwrap();

        let config = Config {
            dictionaries: vec!["python".to_string()],
            allowlist,
            whitelist,
            ..Config::default()
        };
        let index = build_index(&config, &BundledProvider).unwrap();
        assert!(index.contains("def", true));
        assert!(index.contains("newword", true));
        assert!(index.contains("oldword", true));
        assert!(!index.contains("unrelated", true));
    }
}
