use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::{Duration, Instant};

// Counters collected while a merge runs
pub struct ProcessingMetrics {
    start_time: Instant,
    entries_offered: usize,
    files_merged: usize,
    files_skipped: usize,
    lines_read: usize,
}

impl ProcessingMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            entries_offered: 0,
            files_merged: 0,
            files_skipped: 0,
            lines_read: 0,
        }
    }

    pub fn record_offered(&mut self) {
        self.entries_offered += 1;
    }

    pub fn record_merged(&mut self, lines: usize) {
        self.files_merged += 1;
        self.lines_read += lines;
    }

    pub fn record_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub fn get_summary(&self, unique_entries: usize) -> MergeSummary {
        MergeSummary {
            entries_offered: self.entries_offered,
            files_merged: self.files_merged,
            files_skipped: self.files_skipped,
            lines_read: self.lines_read,
            unique_entries,
            elapsed_time: self.start_time.elapsed(),
        }
    }
}

impl Default for ProcessingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one merge run
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    pub entries_offered: usize,
    pub files_merged: usize,
    pub files_skipped: usize,
    pub lines_read: usize,
    pub unique_entries: usize,
    pub elapsed_time: Duration,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Merged {} of {} dictionaries ({} skipped) | Lines read: {} | Unique entries: {} | Took {:.2?}",
            self.files_merged,
            self.entries_offered,
            self.files_skipped,
            self.lines_read,
            self.unique_entries,
            self.elapsed_time
        )
    }
}

/// Per-file spinners and the final summary line, drawn only when enabled
pub struct ProgressTracker {
    enabled: bool,
    current: Option<ProgressBar>,
    metrics: ProcessingMetrics,
}

impl ProgressTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            current: None,
            metrics: ProcessingMetrics::new(),
        }
    }

    pub fn file_offered(&mut self) {
        self.metrics.record_offered();
    }

    pub fn file_skipped(&mut self) {
        self.metrics.record_skipped();
    }

    pub fn file_started(&mut self, name: &str) {
        if !self.enabled {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("reading {}", name));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.current = Some(spinner);
    }

    pub fn file_finished(&mut self, name: &str, lines: usize, unique_so_far: usize) {
        self.metrics.record_merged(lines);
        if let Some(spinner) = self.current.take() {
            spinner.finish_with_message(format!(
                "merged {} ({} lines, {} unique so far)",
                name, lines, unique_so_far
            ));
        }
    }

    pub fn finish(&mut self, unique_entries: usize) -> MergeSummary {
        if let Some(spinner) = self.current.take() {
            spinner.finish_and_clear();
        }
        let summary = self.metrics.get_summary(unique_entries);
        if self.enabled {
            println!("{}", summary);
        }
        summary
    }
}
