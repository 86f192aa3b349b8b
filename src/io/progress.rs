//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct ScriptState {
    name: String,
    applied: usize,
    total: usize,
}

/// Coordinates progress display while replaying scripts
///
/// Shows one bar per script for small batches, and a rolling window of the
/// most recent scripts under a batch bar for large ones
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    script_bars: Vec<ProgressBar>,
    scripts: Vec<ScriptState>,
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
            script_bars: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Create progress bars for `script_count` scripts
    pub fn initialize(&mut self, script_count: usize) {
        if script_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..script_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STEP_STYLE.clone());
            self.script_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking a script with `total` intents
    pub fn start_script(&mut self, index: usize, path: &Path, total: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.scripts.len() {
            self.scripts.resize(index + 1, ScriptState::default());
        }
        if let Some(state) = self.scripts.get_mut(index) {
            *state = ScriptState {
                name,
                applied: 0,
                total,
            };
        }
        self.update_bars();
    }

    /// Report how many intents of a script have been applied
    pub fn update_step(&mut self, index: usize, applied: usize) {
        if let Some(state) = self.scripts.get_mut(index) {
            state.applied = applied;
        }
        self.update_bars();
    }

    /// Mark a script as finished
    pub fn complete_script(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.scripts.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.applied = state.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All scripts replayed");
        }
        let _ = self.multi_progress.clear();
    }

    // Bars show the most recently started scripts
    fn update_bars(&self) {
        let started: Vec<&ScriptState> = self
            .scripts
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let first = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(first..).unwrap_or(&[]);

        for (bar, state) in self.script_bars.iter().zip(visible) {
            bar.set_length(state.total as u64);
            bar.set_position(state.applied as u64);
            let width = state.total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.applied, state.total));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.script_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
