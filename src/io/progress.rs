//! Progress display for the simulation and drawing stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Single progress bar reused across the stages of one poster
///
/// Each stage resets the bar with its own label and length.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager; nothing is shown until a stage starts
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Reset the bar for a new stage of `length` steps
    pub fn start_stage(&self, label: &str, length: usize) {
        self.bar.set_prefix(label.to_string());
        self.bar.set_length(length as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Advance the current stage by one step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Steps completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar after the last stage
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
