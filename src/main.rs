use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellint::cli::output::OutputFormat;
use spellint::{checker, cli, dict, parser, Config, Target};
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "spellint")]
#[command(version, about = "A spellcheck linter for identifiers and comments", long_about = None)]
struct Cli {
    /// Files or directories to check (directories are searched for .py files)
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Comma separated list of dictionaries to enable
    #[arg(short, long, value_delimiter = ',')]
    dictionaries: Vec<String>,

    /// Path to text file containing allowed words
    #[arg(long)]
    allowlist: Option<PathBuf>,

    /// (Legacy) Path to text file containing allowed words
    #[arg(long)]
    whitelist: Option<PathBuf>,

    /// Specify the targets to spellcheck (names, comments)
    #[arg(long, value_delimiter = ',')]
    spellcheck_targets: Vec<Target>,

    /// Directory with additional <name>.txt dictionaries
    #[arg(long)]
    dictionary_dir: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if problems are found
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellint", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.dictionaries.clone(),
        cli.allowlist.clone(),
        cli.whitelist.clone(),
        cli.spellcheck_targets.clone(),
        cli.dictionary_dir.clone(),
    )?;

    if cli.paths.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let files = collect_files(&cli.paths);
    if files.is_empty() {
        anyhow::bail!("No checkable files found in the given paths.");
    }

    // Build the word index once; it is immutable for the whole run
    let provider = dict::provider_for(&config);
    let index = dict::build_index(&config, provider.as_ref())?;
    let checker = checker::SpellChecker::new(index, &config.spellcheck_targets);

    let mut total_errors = 0;

    for file_path in &files {
        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Error: Failed to read {}: {}", file_path.display(), err);
                continue;
            }
        };

        let tokens = parser::tokenize(&content);
        let diagnostics = checker.check(&tokens)?;
        total_errors += diagnostics.len();

        cli::output::print_diagnostics(file_path, &diagnostics, !cli.no_color, &cli.format);
    }

    if matches!(cli.format, OutputFormat::Text) {
        cli::output::print_check_summary(total_errors, &files, !cli.no_color);
    }

    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Expand the given paths into a flat file list. Directories are walked
/// recursively for Python sources; missing paths are reported and skipped.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                let entry_path = entry.path();
                if entry_path.extension().and_then(|e| e.to_str()) == Some("py") {
                    files.push(entry_path.to_path_buf());
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            eprintln!("Error: File not found: {}", path.display());
        }
    }

    files
}
