use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Charset to encode with (default: settings.default_charset)
    #[arg(short = 'c', long)]
    pub charset: Option<String>,

    /// Treat the input as whitespace-separated decimal units instead of text
    #[arg(short = 'u', long)]
    pub units: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Charset to decode with (default: settings.default_charset)
    #[arg(short = 'c', long)]
    pub charset: Option<String>,

    /// Print decimal units instead of text
    #[arg(short = 'u', long)]
    pub units: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available charsets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific charset
    Show {
        /// Charset name
        charset: String,
    },
}
