use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What gets spellchecked: identifiers, comments, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Names,
    Comments,
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "names" => Ok(Target::Names),
            "comments" => Ok(Target::Comments),
            _ => Err(format!("Unknown spellcheck target: {}", s)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Names => write!(f, "names"),
            Target::Comments => write!(f, "comments"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dictionaries")]
    pub dictionaries: Vec<String>,

    #[serde(default = "default_allowlist")]
    pub allowlist: PathBuf,

    /// Legacy allow-list location; still loaded alongside `allowlist`.
    #[serde(default = "default_whitelist")]
    pub whitelist: PathBuf,

    #[serde(default = "default_targets")]
    pub spellcheck_targets: Vec<Target>,

    /// Directory with additional `<name>.txt` dictionaries.
    #[serde(default)]
    pub dictionary_dir: Option<PathBuf>,
}

fn default_dictionaries() -> Vec<String> {
    vec![
        "en_US".to_string(),
        "python".to_string(),
        "technical".to_string(),
    ]
}

fn default_allowlist() -> PathBuf {
    PathBuf::from("allowlist.txt")
}

fn default_whitelist() -> PathBuf {
    PathBuf::from("whitelist.txt")
}

fn default_targets() -> Vec<Target> {
    vec![Target::Names, Target::Comments]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionaries: default_dictionaries(),
            allowlist: default_allowlist(),
            whitelist: default_whitelist(),
            spellcheck_targets: default_targets(),
            dictionary_dir: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionaries: Vec<String>,
        allowlist: Option<PathBuf>,
        whitelist: Option<PathBuf>,
        targets: Vec<Target>,
        dictionary_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellint.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if !dictionaries.is_empty() {
            config.dictionaries = dictionaries;
        }
        if let Some(path) = allowlist {
            config.allowlist = path;
        }
        if let Some(path) = whitelist {
            config.whitelist = path;
        }
        if !targets.is_empty() {
            config.spellcheck_targets = targets;
        }
        if dictionary_dir.is_some() {
            config.dictionary_dir = dictionary_dir;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.dictionaries != default_dictionaries() {
            self.dictionaries = other.dictionaries;
        }
        if other.allowlist != default_allowlist() {
            self.allowlist = other.allowlist;
        }
        if other.whitelist != default_whitelist() {
            self.whitelist = other.whitelist;
        }
        if other.spellcheck_targets != default_targets() {
            self.spellcheck_targets = other.spellcheck_targets;
        }
        if other.dictionary_dir.is_some() {
            self.dictionary_dir = other.dictionary_dir;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellint").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
