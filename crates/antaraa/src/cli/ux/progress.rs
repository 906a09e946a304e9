use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while waiting on the model. Cleared on drop.
#[derive(Debug)]
pub struct GenerationSpinner {
    spinner: ProgressBar,
}

impl GenerationSpinner {
    pub fn new(msg: impl Into<String>) -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style.tick_strings(&["·  ", "•· ", "●•·", " ●•", "  ●", "   "]));
        }
        spinner.set_message(msg.into());
        spinner.enable_steady_tick(Duration::from_millis(120));

        Self { spinner }
    }

    pub fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for GenerationSpinner {
    fn drop(&mut self) {
        self.clear();
    }
}
