use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clipdeck_clipboard::{registry, DefaultClipboard};
use clipdeck_core::{load_config, read_request, write_response, ClipdeckError, Request, Response};
use clipdeck_session::{probe_all, ClipboardSession};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preferences file [default: ~/.config/clipdeck/config.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Display-line budget per query
    #[arg(short = 'n', long, global = true)]
    max_lines: Option<String>,

    /// Clipboard manager to use: CopyQ, GPaste, Clipster, Clipman or Auto
    #[arg(short, long, global = true)]
    manager: Option<String>,

    /// Shell command to run after an entry is copied
    #[arg(long, global = true)]
    copy_hook: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the clipboard history once and print the results
    Query {
        query: Option<String>,
        /// Print the results frame as JSON
        #[arg(long)]
        json: bool,
    },
    /// Put TEXT (or stdin) back on the clipboard
    Copy { text: Option<String> },
    /// Show which clipboard managers are installed, enabled and running
    Managers {
        #[arg(long)]
        json: bool,
    },
    /// Answer line-delimited JSON requests on stdin
    Serve,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let loaded = load_config(cli.config.as_deref());
    if let Some(warning) = &loaded.warning {
        warn!("{}", warning);
    }
    let preferences = loaded
        .preferences
        .with_overrides(cli.max_lines.as_deref(), cli.manager, cli.copy_hook);
    info!("Using manager {} with max_lines={}", preferences.manager, preferences.max_lines);

    let session = ClipboardSession::new(registry(), preferences, Box::new(DefaultClipboard::new()));

    match cli.command {
        Commands::Query { query, json } => run_query(&session, query.as_deref(), json),
        Commands::Copy { text } => run_copy(&session, text),
        Commands::Managers { json } => run_managers(&session, json),
        Commands::Serve => serve(&session),
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for results, so logs go to stderr or a file.
    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path {} has no file name", path.display()))?;
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn run_query(session: &ClipboardSession, query: Option<&str>, json: bool) -> Result<()> {
    let items = session.on_query(query);
    let mut out = io::stdout().lock();

    if json {
        write_response(&mut out, &Response::Results { items })?;
        return Ok(());
    }

    let labels: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    writeln!(out, "{}", labels.join("\n\n"))?;
    Ok(())
}

fn run_copy(session: &ClipboardSession, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let method = session.on_enter(&text, None)?;
    info!("Copied {} chars ({:?})", text.len(), method);
    Ok(())
}

fn run_managers(session: &ClipboardSession, json: bool) -> Result<()> {
    let statuses = probe_all(session.managers());
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&statuses)?)?;
        return Ok(());
    }

    let mark = |flag: bool| if flag { "yes" } else { "no" };
    writeln!(out, "{:<10} {:<10} {:<8} {:<8}", "MANAGER", "INSTALLED", "ENABLED", "RUNNING")?;
    for status in &statuses {
        writeln!(
            out,
            "{:<10} {:<10} {:<8} {:<8}{}",
            status.name,
            mark(status.can_start),
            mark(status.enabled),
            mark(status.running),
            if status.auto_choice { " <- Auto" } else { "" }
        )?;
    }
    Ok(())
}

/// Host protocol loop: one request in, one response out, one at a time.
fn serve(session: &ClipboardSession) -> Result<()> {
    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();
    info!("Serving queries on stdin");

    loop {
        let request = match read_request(&mut reader) {
            Ok(Some(request)) => request,
            Ok(None) => break,
            Err(ClipdeckError::Json(e)) => {
                warn!("Ignoring malformed request: {}", e);
                write_response(&mut writer, &Response::Error { message: e.to_string() })?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let response = match request {
            Request::Query { argument } => Response::Results {
                items: session.on_query(argument.as_deref()),
            },
            Request::Enter { data, manager } => match session.on_enter(&data, manager.as_deref()) {
                Ok(method) => Response::Copied { method },
                Err(e) => {
                    error!("Failed to copy entry: {}", e);
                    Response::Error { message: e.to_string() }
                }
            },
        };
        write_response(&mut writer, &response)?;
    }

    info!("Host closed stdin, exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["clipdeck", "query", "apple", "--manager", "GPaste", "-n", "5"]);
        assert_eq!(cli.manager.as_deref(), Some("GPaste"));
        assert_eq!(cli.max_lines.as_deref(), Some("5"));
        match cli.command {
            Commands::Query { query, json } => {
                assert_eq!(query.as_deref(), Some("apple"));
                assert!(!json);
            }
            _ => panic!("expected query subcommand"),
        }
    }

    #[test]
    fn test_copy_without_text_reads_stdin() {
        let cli = Cli::parse_from(["clipdeck", "copy"]);
        assert!(matches!(cli.command, Commands::Copy { text: None }));
    }
}
