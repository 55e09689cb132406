// UI layer: the interactive session. The menu loop is an explicit state
// machine; each state is handled by one function that returns the next
// state. Input comes through the `Prompt` trait so the whole flow can be
// driven from a script in tests.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::style::{style, Color, Stylize};
use dialoguer::Input;
use indicatif::ProgressBar;
use tracing::warn;

use crate::api::ShareSource;
use crate::error::StoreError;
use crate::export::{CsvExporter, ExportOutcome};
use crate::model::ShareRecord;
use crate::normalize::normalize;
use crate::present::{self, Level};
use crate::store::JsonStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Tracking,
    Viewing,
    Exporting,
    Exited,
}

/// Source of user input for the session.
pub trait Prompt {
    /// The raw menu selection.
    fn read_choice(&mut self) -> std::io::Result<String>;
    /// A comma-separated list of post IDs.
    fn read_post_ids(&mut self) -> std::io::Result<String>;
}

/// `Prompt` backed by `dialoguer` text inputs.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_choice(&mut self) -> std::io::Result<String> {
        Input::<String>::new()
            .with_prompt("Enter your choice")
            .allow_empty(true)
            .interact_text()
    }

    fn read_post_ids(&mut self) -> std::io::Result<String> {
        Input::<String>::new()
            .with_prompt("Enter Post IDs (comma-separated)")
            .allow_empty(true)
            .interact_text()
    }
}

/// Everything the session needs: where shares come from, where they are
/// saved and exported, how to ask the user, and where to print.
pub struct Session<'a> {
    source: &'a dyn ShareSource,
    store: &'a JsonStore,
    exporter: &'a CsvExporter,
    prompt: &'a mut dyn Prompt,
    out: &'a mut dyn Write,
}

impl<'a> Session<'a> {
    pub fn new(
        source: &'a dyn ShareSource,
        store: &'a JsonStore,
        exporter: &'a CsvExporter,
        prompt: &'a mut dyn Prompt,
        out: &'a mut dyn Write,
    ) -> Self {
        Session {
            source,
            store,
            exporter,
            prompt,
            out,
        }
    }

    /// Run from the menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        let mut state = SessionState::Menu;
        while state != SessionState::Exited {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Handle one state and return the next one. Every state except
    /// `Exited` leads back to the menu.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        match state {
            SessionState::Menu => self.menu(),
            SessionState::Tracking => self.track_shares().map(|_| SessionState::Menu),
            SessionState::Viewing => self.view_saved_data().map(|_| SessionState::Menu),
            SessionState::Exporting => self.export_data_to_csv().map(|_| SessionState::Menu),
            SessionState::Exited => Ok(SessionState::Exited),
        }
    }

    fn notice(&mut self, level: Level, message: &str) -> Result<()> {
        present::notice(&mut *self.out, level, message).context("Failed to write to terminal")
    }

    fn menu(&mut self) -> Result<SessionState> {
        writeln!(
            self.out,
            "\n{}",
            style("--- Post Share Tracker ---").with(Color::Magenta).bold()
        )?;
        writeln!(
            self.out,
            "[1] Track Shares for a Post\n[2] View Saved Data\n[3] Export Data to CSV\n[4] Exit"
        )?;
        self.out.flush()?;

        let choice = self.prompt.read_choice().context("Failed to read menu choice")?;
        let next = match choice.trim() {
            "1" => SessionState::Tracking,
            "2" => SessionState::Viewing,
            "3" => SessionState::Exporting,
            "4" => {
                self.notice(Level::Success, "Goodbye!")?;
                SessionState::Exited
            }
            _ => {
                self.notice(Level::Error, "Invalid choice. Please try again.")?;
                SessionState::Menu
            }
        };
        Ok(next)
    }

    /// Fetch every entered post ID in turn. A failing ID is reported and
    /// skipped; the rest of the batch still runs.
    fn track_shares(&mut self) -> Result<()> {
        let input = self.prompt.read_post_ids().context("Failed to read post IDs")?;
        let mut all_shares: Vec<ShareRecord> = Vec::new();

        for post_id in input.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            self.notice(Level::Info, &format!("Fetching shares for post ID: {}...", post_id))?;

            // Draws on stderr only when it is a terminal.
            let spinner = ProgressBar::new_spinner().with_message(format!("Fetching {}", post_id));
            spinner.enable_steady_tick(Duration::from_millis(100));
            let result = self.source.fetch_shares(post_id);
            spinner.finish_and_clear();

            match result {
                Ok(raw) => all_shares.extend(normalize(post_id, &raw)),
                Err(e) => {
                    warn!(post_id, error = %e, "skipping post");
                    self.notice(
                        Level::Error,
                        &format!("Error fetching shares for post ID {}: {}", post_id, e),
                    )?;
                }
            }
        }

        if all_shares.is_empty() {
            return self.notice(Level::Warning, "No data to save or display.");
        }

        match self.store.write_all(&all_shares) {
            Ok(()) => self.notice(
                Level::Success,
                &format!("Data successfully saved to {}.", self.store.path().display()),
            )?,
            Err(e) => self.notice(Level::Error, &format!("Failed to save data: {}", e))?,
        }
        Ok(present::render(&mut *self.out, &all_shares)?)
    }

    fn view_saved_data(&mut self) -> Result<()> {
        match self.store.read_all() {
            Ok(records) if records.is_empty() => {
                self.notice(Level::Warning, "Saved data is empty.")
            }
            Ok(records) => Ok(present::render(&mut *self.out, &records)?),
            Err(StoreError::NotFound(_)) => self.notice(Level::Error, "No saved data found."),
            Err(e) => self.notice(Level::Error, &format!("Could not load saved data: {}", e)),
        }
    }

    fn export_data_to_csv(&mut self) -> Result<()> {
        let records = match self.store.read_all() {
            Ok(records) => records,
            Err(StoreError::NotFound(_)) => {
                return self.notice(Level::Error, "No saved data found to export.")
            }
            Err(e) => {
                return self.notice(Level::Error, &format!("Could not load saved data: {}", e))
            }
        };

        match self.exporter.export_csv(&records) {
            Ok(ExportOutcome::Written { path, .. }) => self.notice(
                Level::Success,
                &format!("Data successfully exported to {}.", path.display()),
            ),
            Ok(ExportOutcome::NothingToExport) => self.notice(Level::Warning, "No data to export."),
            Err(e) => self.notice(Level::Error, &format!("Export failed: {}", e)),
        }
    }
}
