//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "doi2bib", version, about = "Fetch and format BibTeX citations for DOIs")]
pub struct Cli {
    /// Config file (defaults to <config dir>/doi2bib/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Resolver base URL, e.g. https://doi.org/
    #[arg(long, global = true)]
    pub resolver: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the raw BibTeX for a DOI
    Fetch { doi: String },
    /// Reformat BibTeX from a file, or stdin when no file is given
    Format { file: Option<PathBuf> },
    /// Fetch a DOI and print the formatted entry
    Cite { doi: String },
    /// Automation mode: read stdin, always print a result string and exit 0
    Shortcut {
        #[arg(value_enum)]
        action: ShortcutAction,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Fetch,
    Format,
    Cite,
}

impl Command {
    /// Whether the command talks to the resolver
    pub fn needs_resolver(&self) -> bool {
        match self {
            Command::Fetch { .. } | Command::Cite { .. } => true,
            Command::Format { .. } => false,
            Command::Shortcut { action } => *action != ShortcutAction::Format,
        }
    }
}
