use std::io::{self, Write};

use clap::ValueEnum;
use sweeper_core::*;

#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board drawings and messages
    #[default]
    Text,
    /// One JSON notification per line
    Json,
}

/// Observer writing game notifications to `out`.
///
/// Observer callbacks cannot fail, so the first write error is kept until
/// [`Printer::take_error`] is called.
pub struct Printer<W> {
    out: W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    /// Human-readable text, only shown in text mode.
    pub fn message(&mut self, text: &str) {
        match self.format {
            OutputFormat::Text => self.write_line(text),
            OutputFormat::Json => log::warn!("{}", text),
        }
    }

    /// Board drawing as produced by `Board`'s `Display`, only shown in text mode.
    pub fn board(&mut self, drawing: &str) {
        if self.format == OutputFormat::Text {
            self.write_line(drawing.trim_end_matches('\n'));
        }
    }

    fn notify(&mut self, notification: Notification) {
        if self.format != OutputFormat::Json {
            return;
        }
        match serde_json::to_string(&notification) {
            Ok(json) => self.write_line(&json),
            Err(err) => log::error!("Failed to encode {:?}: {}", notification, err),
        }
    }

    fn write_line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> GameObserver for Printer<W> {
    fn cell_changed(&mut self, (row, col): Coord2, state: DisplayState) {
        log::trace!("Cell ({}, {}) is now {:?}", row, col, state);
        self.notify(Notification::CellChanged { row, col, state });
    }

    fn flag_budget_changed(&mut self, budget: FlagBudget) {
        self.notify(Notification::FlagBudgetChanged { budget });
        if self.format == OutputFormat::Text {
            self.write_line(&format!("Bombs left: {budget}"));
        }
    }

    fn game_ended(&mut self, won: bool) {
        self.notify(Notification::GameEnded { won });
        if self.format == OutputFormat::Text {
            self.write_line(if won {
                "Congratulations, you won!"
            } else {
                "KABOOM! You lose."
            });
        }
    }
}
