use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(80);
const SPINNER: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Numbered steps of a command. A running step is a spinner; a finished one
/// becomes a check-mark line with its duration and details. Nothing is drawn
/// when stderr is not a terminal or `--quiet` is given.
pub struct Progress {
    visible: bool,
    total: u8,
    completed: u8,
    started: Instant,
    running: Option<Step>,
}

struct Step {
    description: String,
    spinner: ProgressBar,
    started: Instant,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        Self {
            visible: interactive,
            total: total_steps,
            completed: 0,
            started: Instant::now(),
            running: None,
        }
    }

    pub fn begin(&mut self, description: &str) {
        if let Some(previous) = self.running.take() {
            previous.spinner.finish_and_clear();
        }

        let spinner = if self.visible {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {prefix} {msg}...") {
                spinner.set_style(style.tick_chars(SPINNER));
            }
            spinner.enable_steady_tick(TICK);
            spinner
        } else {
            ProgressBar::hidden()
        };
        spinner.set_prefix(format!("[{}/{}]", self.completed + 1, self.total));
        spinner.set_message(description.to_string());

        self.running = Some(Step {
            description: description.to_string(),
            spinner,
            started: Instant::now(),
        });
    }

    /// Ends the running step and lists `details` beneath it.
    pub fn done<I>(&mut self, details: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let Some(step) = self.running.take() else {
            return;
        };
        step.spinner.finish_and_clear();
        self.completed += 1;
        if !self.visible {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            step.description,
            step.started.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {detail}");
        }
    }

    pub fn finish(mut self, summary: &str) {
        if let Some(step) = self.running.take() {
            step.spinner.finish_and_clear();
        }
        if !self.visible {
            return;
        }

        let total = format!("Total: {:.2}s", self.started.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m {summary:<44} {total:>12}");
        let _ = writeln!(stderr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_progress_still_numbers_steps() {
        let mut progress = Progress::new(false, 2);
        progress.begin("Loading");
        progress.done(["detail"]);
        assert_eq!(progress.completed, 1);
        assert!(progress.running.is_none());

        progress.begin("Writing");
        let step = progress.running.as_ref().unwrap();
        assert_eq!(step.description, "Writing");
        assert_eq!(step.spinner.prefix(), "[2/2]");
        progress.finish("Done");
    }

    #[test]
    fn done_without_a_running_step_is_ignored() {
        let mut progress = Progress::new(false, 1);
        progress.done(Vec::<String>::new());
        assert_eq!(progress.completed, 0);
    }
}
