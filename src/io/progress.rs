//! Terminal progress display for frame rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} frames {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows how many animation steps of the current input have been rendered
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an idle bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Configure the bar for a new input with `frame_count` steps to render
    pub fn start(&self, path: &Path, frame_count: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_length(frame_count as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Report that animation step `step` has been rendered
    pub fn frame_rendered(&self, step: usize) {
        self.bar.set_position(step as u64 + 1);
    }

    /// Report that frames are being written to `output`
    pub fn exporting(&self, output: &Path) {
        self.bar.set_message(format!("-> {}", output.display()));
    }

    /// Mark the run as complete and report elapsed time
    pub fn finish(&self, elapsed: Duration) {
        self.bar.finish_with_message(format!("done in {:.2}s", elapsed.as_secs_f64()));
    }

    /// Current rendered-step count
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total steps for the current input
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}
