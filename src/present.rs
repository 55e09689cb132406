// Terminal output: the share table and the coloured one-line notices used by
// the session. Everything writes to a caller-supplied `io::Write` so the
// session can be pointed at a buffer in tests.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use crossterm::style::{style, Color, Stylize};

use crate::model::{ShareRecord, FIELD_NAMES};

pub const TABLE_TITLE: &str = "Post Shares";
pub const EMPTY_NOTICE: &str = "No shares found to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> Color {
        match self {
            Level::Info => Color::Cyan,
            Level::Success => Color::Green,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Print a single bold, coloured status line.
pub fn notice(out: &mut dyn Write, level: Level, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).with(level.color()).bold())
}

/// Print `records` as a table, or the empty notice when there are none.
pub fn render(out: &mut dyn Write, records: &[ShareRecord]) -> io::Result<()> {
    if records.is_empty() {
        return notice(out, Level::Warning, EMPTY_NOTICE);
    }

    let centered = |text: &str| Cell::new(text).set_alignment(CellAlignment::Center);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(FIELD_NAMES.map(centered));
    for record in records {
        table.add_row(record.values().map(centered));
    }

    writeln!(out, "{}", style(TABLE_TITLE).bold())?;
    writeln!(out, "{table}")
}
