//! doi2bib binary
//!
//! Fetches BibTeX for DOIs and reformats it. Logs go to stderr; stdout only
//! ever carries BibTeX or, in shortcut mode, an `Error: ...` line.

mod cli;

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use doi2bib::{Doi2BibConfig, HostInput};
use doi2bib_identifiers::DoiResolver;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ShortcutAction};

type BoxError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Automation hosts read the error from stdout instead of the exit code
    let shortcut_mode = matches!(cli.command, Command::Shortcut { .. });

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if shortcut_mode => {
            println!("{}{}", doi2bib::ERROR_PREFIX, e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}{}", doi2bib::ERROR_PREFIX, e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Doi2BibConfig, BoxError> {
    let mut config = Doi2BibConfig::load(cli.config.as_deref())?;
    config.apply_env()?;

    if let Some(url) = &cli.resolver {
        config.resolver.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.resolver.timeout_secs = secs;
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<String, BoxError> {
    let config = load_config(&cli)?;
    let resolver = if cli.command.needs_resolver() {
        Some(DoiResolver::new(config.resolver)?)
    } else {
        None
    };
    tracing::debug!("Running {:?}", cli.command);

    match (cli.command, resolver) {
        (Command::Fetch { doi }, Some(resolver)) => {
            Ok(doi2bib::try_to_bibtex(&resolver, doi).await?)
        }
        (Command::Cite { doi }, Some(resolver)) => Ok(doi2bib::try_cite(&resolver, doi).await?),
        (Command::Format { file }, _) => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => read_stdin()?,
            };
            Ok(doi2bib::try_format_bibtex(raw)?)
        }
        (Command::Shortcut { action }, resolver) => {
            let input = HostInput::from_host_text(&read_stdin()?);
            Ok(shortcut(action, resolver.as_ref(), input).await)
        }
        (command, None) => Err(format!("no resolver configured for {:?}", command).into()),
    }
}

/// Shortcut mode never fails: every error becomes the output string
async fn shortcut(
    action: ShortcutAction,
    resolver: Option<&DoiResolver>,
    input: HostInput,
) -> String {
    match (action, resolver) {
        (ShortcutAction::Format, _) => doi2bib::format_bibtex(input),
        (ShortcutAction::Fetch, Some(resolver)) => doi2bib::to_bibtex(resolver, input).await,
        (ShortcutAction::Cite, Some(resolver)) => doi2bib::cite(resolver, input).await,
        (_, None) => format!("{}no resolver configured", doi2bib::ERROR_PREFIX),
    }
}

fn read_stdin() -> Result<String, std::io::Error> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
