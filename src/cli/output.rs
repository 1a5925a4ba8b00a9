use crate::Diagnostic;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonDiagnostic {
    file: String,
    line: usize,
    column: usize,
    code: String,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    file: String,
    total_errors: usize,
    errors: Vec<JsonDiagnostic>,
}

pub fn print_diagnostics(
    file_path: &Path,
    diagnostics: &[Diagnostic],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text(file_path, diagnostics, colored_output),
        OutputFormat::Json => print_json(file_path, diagnostics),
    }
}

fn print_text(file_path: &Path, diagnostics: &[Diagnostic], colored_output: bool) {
    if diagnostics.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for diagnostic in diagnostics {
        let line_info = format!("{}:{}", diagnostic.line, diagnostic.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                diagnostic.code.as_str().red().bold(),
                diagnostic
                    .message
                    .strip_prefix(diagnostic.code.as_str())
                    .unwrap_or(&diagnostic.message)
                    .trim_start()
            );
        } else {
            println!("  {} {}", line_info, diagnostic.message);
        }
    }
}

fn print_json(file_path: &Path, diagnostics: &[Diagnostic]) {
    let errors: Vec<JsonDiagnostic> = diagnostics
        .iter()
        .map(|d| JsonDiagnostic {
            file: file_path.display().to_string(),
            line: d.line,
            column: d.column,
            code: d.code.to_string(),
            message: d.message.clone(),
        })
        .collect();

    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_errors: errors.len(),
        errors,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Error: failed to serialize diagnostics: {}", err),
    }
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling problems found!".green().bold());
        } else {
            println!("✓ No spelling problems found!");
        }
    } else {
        let problem_word = if total_errors == 1 {
            "problem"
        } else {
            "problems"
        };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                problem_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                problem_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
