// Entrypoint for the share tracker.
// - Keeps `main` small: set up logging and config, build the pipeline
//   pieces, and hand them to the session loop.
// - Failures that escape the session are reported, not re-raised.

use std::io::{self, stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use share_tracker::api::ShareFetcher;
use share_tracker::config::Config;
use share_tracker::export::CsvExporter;
use share_tracker::present::{notice, Level};
use share_tracker::store::JsonStore;
use share_tracker::ui::{Session, TerminalPrompt};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const CANCELLED: &str = "Operation cancelled by user.";

/// Exit status for a user interrupt, whether it lands mid-request or at a
/// prompt.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    // Ctrl-C while a request is in flight ends the process with a message
    // instead of a panic trace.
    if let Err(e) = ctrlc::set_handler(|| {
        let mut out = stdout();
        let _ = writeln!(out);
        let _ = notice(&mut out, Level::Error, CANCELLED);
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        warn!(error = %e, "could not install interrupt handler");
    }

    let mut out = stdout();
    if let Err(e) = run(&mut out) {
        let _ = writeln!(out);
        let _ = notice(&mut out, Level::Error, &failure_message(&e));
        if is_interrupted(&e) {
            std::process::exit(EXIT_INTERRUPTED);
        }
    }
}

/// True when the failure is an interrupted read, i.e. Ctrl-C at a prompt.
fn is_interrupted(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
}

fn failure_message(e: &anyhow::Error) -> String {
    if is_interrupted(e) {
        CANCELLED.to_string()
    } else {
        format!("An unexpected error occurred: {:#}", e)
    }
}

fn run(out: &mut io::Stdout) -> anyhow::Result<()> {
    let config = Config::from_env();
    if config.api.access_token.is_empty() {
        warn!("no access token configured; set SHARE_TRACKER_ACCESS_TOKEN");
    }

    let fetcher = ShareFetcher::new(&config.api)?;
    let store = JsonStore::new(&config.storage);
    let exporter = CsvExporter::new(&config.storage);

    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    notice(out, Level::Info, "Welcome to the Post Share Tracker!")?;

    let mut prompt = TerminalPrompt;
    Session::new(&fetcher, &store, &exporter, &mut prompt, out).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn interrupted_prompt_reports_cancellation() {
        let err: anyhow::Error = Err::<(), _>(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"))
            .context("Failed to read menu choice")
            .unwrap_err();
        assert!(is_interrupted(&err));
        assert_eq!(failure_message(&err), CANCELLED);
    }

    #[test]
    fn other_failures_are_reported_as_unexpected() {
        let err = anyhow::Error::new(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            .context("Failed to write to terminal");
        assert!(!is_interrupted(&err));
        let message = failure_message(&err);
        assert!(message.starts_with("An unexpected error occurred: "));
        assert!(message.contains("Failed to write to terminal"));
        assert!(message.contains("pipe closed"));
    }
}
