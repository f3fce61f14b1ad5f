//! Terminal front end: page views on stdout, notifications and prompts on
//! stderr.

mod views;

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use library_ui::{Notification, NotificationDisplay, Severity};
use library_ui::notify::NotificationId;

pub use views::{BookScreen, EditScreen, ListScreen};

/// Output buffer plus loading indicator shared by every view.
///
/// Lines rendered before the content is revealed are held back and flushed
/// on reveal; later lines are printed immediately.
#[derive(Debug, Default)]
pub struct Screen {
    pending: Vec<String>,
    revealed: bool,
    quiet: bool,
}

impl Screen {
    /// Render nothing to stdout; notifications still appear.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn line(&mut self, line: impl Into<String>) {
        if self.quiet {
            return;
        }
        if self.revealed {
            println!("{}", line.into());
        } else {
            self.pending.push(line.into());
        }
    }

    fn set_progress(&mut self, percent: u8) {
        tracing::trace!(percent, "progress");
        if self.quiet || !io::stderr().is_terminal() {
            return;
        }
        eprint!("\r{} {:>3}%", "Loading".dimmed(), percent);
        let _ = io::stderr().flush();
    }

    fn hide_loader(&mut self) {
        if !self.quiet && io::stderr().is_terminal() {
            eprint!("\r\x1b[2K");
            let _ = io::stderr().flush();
        }
    }

    fn reveal_content(&mut self) {
        self.revealed = true;
        let mut out = io::stdout().lock();
        for line in self.pending.drain(..) {
            if writeln!(out, "{}", line).is_err() {
                break;
            }
        }
    }
}

/// Blocking `[y/N]` prompt on the terminal. Anything but `y` declines.
pub fn confirm(question: &str) -> bool {
    eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), question);
    if io::stderr().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot read confirmation");
            false
        }
    }
}

/// Prints notifications to stderr as they arrive.
pub struct TerminalNotifications;

impl NotificationDisplay for TerminalNotifications {
    fn show(&self, notification: &Notification) {
        let label = match notification.severity {
            Severity::Success => "✓".green().bold(),
            Severity::Error => "✗".red().bold(),
            Severity::Warning => "!".yellow().bold(),
        };
        eprintln!("{} {}", label, notification.message);
    }

    fn remove(&self, id: NotificationId) {
        tracing::trace!(?id, "notification expired");
    }
}
