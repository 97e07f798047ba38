//! Command-line and environment configuration for the `lexeme-tfidf` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::report::DEFAULT_DISPLAY_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "lexeme-tfidf", about = "TF-IDF over a directory of lexeme CSV files")]
pub struct Cli {
    /// Directory containing the CSV files; prompted for when omitted
    #[arg(env = "LEXEME_TFIDF_INPUT")]
    pub input_dir: Option<PathBuf>,

    /// Maximum rows per table
    #[arg(long, short = 'n', env = "LEXEME_TFIDF_LIMIT", default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub limit: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub limit: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve into a [`Config`], asking `prompt` for the input directory
    /// when none was given on the command line or in the environment
    pub fn into_config<F>(self, prompt: F) -> std::io::Result<Config>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        let input_dir = match self.input_dir {
            Some(dir) => dir,
            None => PathBuf::from(prompt()?.trim()),
        };
        Ok(Config {
            input_dir,
            limit: self.limit,
            format: self.format,
            output: self.output,
        })
    }
}
