//! Progress tracking for batch plate generation
//!
//! Small batches get one bar per file that steps through the packing
//! phases; large batches collapse to a single batch bar so the terminal
//! stays readable.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Plates: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch operations
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let bar = self.multi_progress.add(ProgressBar::new(file_count as u64));
            bar.set_style(BATCH_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            self.batch_bar = Some(bar);
        }
    }

    /// Begin tracking one file stepping through `phase_count` phases
    pub fn start_file(&mut self, index: usize, path: &Path, phase_count: u64) {
        if self.batch_bar.is_some() {
            return;
        }
        let bar = self.multi_progress.add(ProgressBar::new(phase_count));
        bar.set_style(FILE_STYLE.clone());
        bar.set_message(
            path.file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string()),
        );
        debug_assert_eq!(index, self.file_bars.len());
        self.file_bars.push(bar);
    }

    /// Advance the file's bar to the named packing phase
    pub fn update_phase(&self, index: usize, phase: &str) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_prefix(phase.to_string());
            bar.inc(1);
        }
    }

    /// Mark one file finished
    pub fn complete_file(&self, index: usize, elapsed: Duration) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_prefix(format!("done in {:.2}s", elapsed.as_secs_f64()));
            bar.finish();
        }
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish all remaining bars
    pub fn finish(&mut self) {
        if let Some(bar) = self.batch_bar.take() {
            bar.finish();
        }
        for bar in self.file_bars.drain(..) {
            bar.finish();
        }
    }
}
