use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use parsync::cli::{CliArgs, CliCommand};
use parsync::range::Span;
use parsync::{Position, Settings, Watchlist};

fn main() -> Result<()> {
    parsync::tracing::init();

    let args = CliArgs::parse();
    let settings = Settings::load();
    let explicit = args.watchlist.clone().or(settings.watchlist_path.clone());

    match &args.command {
        CliCommand::Check { paths } => {
            let watchlist = current_watchlist(explicit);
            for path in paths {
                let id = path.to_string_lossy();
                let verdict = if watchlist.matches(&id) {
                    "tracked"
                } else {
                    "ignored"
                };
                println!("{}\t{}", verdict, id);
            }
        }

        CliCommand::Span { file, .. } => {
            let cursor = args.command.cursor().unwrap_or_default();
            print_span(file, cursor)?;
        }

        CliCommand::Watchlist { init } => {
            let path = Watchlist::locate(explicit)?;
            if *init {
                Watchlist::ensure_file(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
            }

            println!("{}", path.display());
            let watchlist = if path.exists() {
                Watchlist::read(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?
            } else {
                println!("(not created yet, defaults apply; use --init to create it)");
                Watchlist::default()
            };
            for pattern in watchlist.patterns() {
                println!("  {}", pattern);
            }
        }
    }

    Ok(())
}

/// The watchlist as a host would load it, without creating anything on disk
fn current_watchlist(explicit: Option<PathBuf>) -> Watchlist {
    let Ok(path) = Watchlist::locate(explicit) else {
        return Watchlist::default();
    };
    match Watchlist::read(&path) {
        Ok(watchlist) => watchlist,
        Err(e) => {
            tracing::debug!("Using default watchlist ({}): {}", path.display(), e);
            Watchlist::default()
        }
    }
}

fn print_span(file: &Path, cursor: Position) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let span = Span::resolve(&text, cursor)?;

    println!(
        "rows [{}, {}) cursor {}:{}",
        span.start_row, span.end_row, span.cursor.line, span.cursor.column
    );
    print!("{}", span.text);
    Ok(())
}
