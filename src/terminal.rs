// Terminal implementations of the UI collaborators

use crate::date::format_date;
use crate::task::Task;
use crate::ui::{Confirmer, Notifier, Renderer};
use colored::Colorize;
use inquire::Confirm;
use std::io::{self, Write};
use tracing::warn;

pub const EMPTY_STATE: &str = "No tasks yet";

/// Asks on the terminal; defaults to "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirmer {
    assume_yes: bool,
}

impl PromptConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for PromptConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                // No TTY, or the prompt was interrupted
                warn!(error = ?e, "Confirmation prompt failed, treating as declined");
                false
            }
        }
    }
}

/// Writes warnings to a stream, stderr by default
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", format!("⚠️  {}", message).yellow()) {
            warn!(error = ?e, "Failed to write notification");
        }
    }
}

/// Prints the visible task list, one line per task
pub struct ListRenderer<W: Write> {
    out: W,
    locale: String,
}

impl ListRenderer<io::Stdout> {
    pub fn stdout(locale: impl Into<String>) -> Self {
        Self::new(io::stdout(), locale)
    }
}

impl<W: Write> ListRenderer<W> {
    pub fn new(out: W, locale: impl Into<String>) -> Self {
        Self {
            out,
            locale: locale.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_line(&self, task: &Task) -> String {
        // Fall back to the stored form when the date or locale is unusable
        let date = format_date(&task.date, &self.locale).unwrap_or_else(|_| task.date.clone());

        let (checkbox, text) = if task.completed {
            ("[x]".green(), task.task.as_str().strikethrough().dimmed())
        } else {
            ("[ ]".normal(), task.task.as_str().normal())
        };

        format!("{} {}  {}  📅 {}", checkbox, task.id.to_string().dimmed(), text, date)
    }

    fn write_tasks(&mut self, tasks: &[&Task]) -> io::Result<()> {
        if tasks.is_empty() {
            writeln!(self.out, "{}", EMPTY_STATE.dimmed())?;
            return Ok(());
        }

        for task in tasks {
            let line = self.render_line(task);
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for ListRenderer<W> {
    fn render(&mut self, tasks: &[&Task]) {
        if let Err(e) = self.write_tasks(tasks) {
            warn!(error = ?e, "Failed to render task list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(renderer: ListRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(PromptConfirmer::new(true).confirm("Are you sure?"));
    }

    #[test]
    fn test_notifier_writes_message() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify("Task can not be empty!");

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(out.contains("Task can not be empty!"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_state() {
        let mut renderer = ListRenderer::new(Vec::new(), "en_US");
        renderer.render(&[]);
        assert!(output(renderer).contains(EMPTY_STATE));
    }

    #[test]
    fn test_render_lines_in_order_with_formatted_dates() {
        let first = Task::new(1, "Write report", "2024-03-05");
        let mut second = Task::new(2, "Buy milk", "2024-01-01");
        second.completed = true;

        let mut renderer = ListRenderer::new(Vec::new(), "en_US");
        renderer.render(&[&first, &second]);

        let out = output(renderer);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Write report"));
        assert!(lines[0].contains("5 March 2024"));
        assert!(lines[1].contains("Buy milk"));
        assert!(lines[1].contains("[x]"));
        assert!(!out.contains(EMPTY_STATE));
    }

    #[test]
    fn test_render_localized_date() {
        let task = Task::new(1, "Tulis laporan", "2024-03-05");
        let mut renderer = ListRenderer::new(Vec::new(), "id-ID");
        renderer.render(&[&task]);
        assert!(output(renderer).contains("5 Maret 2024"));
    }

    #[test]
    fn test_render_unparseable_date_shows_raw() {
        let task = Task::new(1, "Someday", "someday");
        let mut renderer = ListRenderer::new(Vec::new(), "en_US");
        renderer.render(&[&task]);
        assert!(output(renderer).contains("📅 someday"));
    }
}
