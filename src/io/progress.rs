//! Batch progress display across the files of one invocation

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of reference images
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with a zero-length bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, completed: 0 }
    }

    /// Size the bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.completed = 0;
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the file currently being scattered
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one finished file
    pub fn complete_file(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Number of files completed since [`Self::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
