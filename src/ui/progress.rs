use crate::core::types::{ProgressEvent, Summary};
use crate::queue::listener::{ProgressListener, WorkerEvent};
use crate::ui;
use crate::utils::machine_output;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;
use std::time::Instant;

/// Single-line percent bar redrawn in place with `\r`.
pub struct ProgressBar {
    percent: u8,
    message: String,
    start_time: Instant,
    width: usize,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new("")
    }
}

impl ProgressBar {
    pub fn new(message: &str) -> Self {
        Self {
            percent: 0,
            message: message.to_string(),
            start_time: Instant::now(),
            width: 40,
        }
    }

    /// Move the bar to `percent` (capped at 100) with a new caption.
    pub fn set(&mut self, percent: u8, message: &str) {
        self.percent = percent.min(100);
        self.message = message.to_string();
        self.draw();
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Erase the bar line so a log line can be printed in its place.
    pub fn clear(&self) {
        print!("\r{:width$}\r", "", width = self.width + 60);
        io::stdout().flush().unwrap_or(());
    }

    /// Draw the final state and move to a fresh line.
    pub fn finish(self) {
        self.draw();
        println!();
    }

    fn render(&self) -> String {
        let filled = (usize::from(self.percent) * self.width) / 100;
        let bar = "█".repeat(filled);
        let empty = "░".repeat(self.width.saturating_sub(filled));
        let elapsed = self.start_time.elapsed().as_secs();

        format!(
            "{} [{}{}] {} {} {}",
            "▸".dimmed(),
            bar.green(),
            empty.dimmed(),
            format!("{:>3}%", self.percent).bold(),
            caption(&self.message).cyan(),
            format!("{}s", elapsed).dimmed()
        )
    }

    fn draw(&self) {
        print!("\r{}", self.render());
        io::stdout().flush().unwrap_or(());
    }
}

/// Keep the caption short enough for one terminal line.
fn caption(message: &str) -> String {
    const MAX: usize = 48;
    if message.chars().count() > MAX {
        let head: String = message.chars().take(MAX - 3).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Step,
    Failure,
    Cancelled,
    Completed,
}

fn classify(event: &ProgressEvent) -> LineKind {
    if event.message.starts_with("Error for ") {
        LineKind::Failure
    } else if event.message == "Cancelled by user" {
        LineKind::Cancelled
    } else if event.percent == 100 && event.message.ends_with(" Completed") {
        LineKind::Completed
    } else {
        LineKind::Step
    }
}

/// Log-area line for one event: `[ 33%] Installing/Updating Git.Git...`.
fn log_line(event: &ProgressEvent) -> String {
    format!("[{:>3}%] {}", event.percent, event.message)
}

/// Renders worker events on the terminal.
///
/// Every event becomes one appended log line; with the bar enabled the bar is
/// redrawn underneath after each line. In JSON mode each event is printed as
/// one compact object per line instead.
pub struct ConsoleListener {
    show_bar: bool,
    json: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleListener {
    /// The bar is only drawn when stdout is a terminal.
    pub fn new(show_bar: bool) -> Self {
        Self {
            show_bar: show_bar && io::stdout().is_terminal(),
            json: false,
            bar: Mutex::new(None),
        }
    }

    pub fn json() -> Self {
        Self {
            show_bar: false,
            json: true,
            bar: Mutex::new(None),
        }
    }

    fn emit_json(&self, event: WorkerEvent) {
        if let Err(e) = machine_output::emit_line(&event) {
            ui::error(&format!("Failed to serialize event: {}", e));
        }
    }
}

impl ProgressListener for ConsoleListener {
    fn on_progress(&self, event: &ProgressEvent) {
        if self.json {
            self.emit_json(WorkerEvent::Progress(event.clone()));
            return;
        }

        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(bar) = bar.as_ref() {
            bar.clear();
        }

        let line = log_line(event);
        match classify(event) {
            LineKind::Failure => ui::error(&line),
            LineKind::Cancelled => ui::warning(&line),
            LineKind::Completed => ui::success(&line),
            LineKind::Step => ui::info(&line),
        }

        if self.show_bar && !ui::is_quiet() {
            bar.get_or_insert_with(ProgressBar::default)
                .set(event.percent, &event.message);
        }
    }

    fn on_finished(&self, summary: Summary) {
        if self.json {
            self.emit_json(WorkerEvent::Finished(summary));
            return;
        }

        let bar = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(bar) = bar {
            bar.finish();
        }

        let line = format!("Finished: {}", summary);
        match summary {
            Summary::Done => ui::success(&line),
            Summary::Cancelled => ui::warning(&line),
        }
    }
}
