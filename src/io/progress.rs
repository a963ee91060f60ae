//! Terminal progress display for a generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} tiles")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks painted tiles against the number a run is expected to paint
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible progress bar for `expected_tiles` tiles
    pub fn new(label: &str, expected_tiles: usize) -> Self {
        let bar = ProgressBar::new(expected_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(expected_tiles: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(expected_tiles as u64);
        Self { bar }
    }

    /// Report the number of tiles painted so far
    pub fn update(&self, tiles_painted: usize) {
        self.bar.set_position(tiles_painted as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
