// file: src/controller/progress.rs
// description: progress tracking and statistics for a document fetch fan-out
// reference: uses indicatif for progress bars and tracks fetch outcomes

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchStats {
    pub requested: usize,
    pub appended: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

impl FetchStats {
    pub fn success_rate(&self) -> f64 {
        let total = self.appended + self.failed;
        if total == 0 {
            return 0.0;
        }
        (self.appended as f64 / total as f64) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.appended + self.failed == self.requested
    }
}

pub struct FetchProgress {
    bar: ProgressBar,
    requested: usize,
    appended: AtomicUsize,
    failed: AtomicUsize,
    start_time: Instant,
}

impl FetchProgress {
    /// A tracker for `requested` fetches; the bar is drawn only when `visible`.
    pub fn new(requested: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(requested as u64)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            requested,
            appended: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_appended(&self) {
        self.appended.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> FetchStats {
        FetchStats {
            requested: self.requested,
            appended: self.appended.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_message(&self) {
        let failed = self.failed.load(Ordering::SeqCst);
        if failed > 0 {
            self.bar.set_message(format!("{} failed", failed));
        }
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} documents {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_stats_success_rate() {
        let stats = FetchStats {
            requested: 4,
            appended: 3,
            failed: 1,
            duration_ms: 10,
        };
        assert_eq!(stats.success_rate(), 75.0);
        assert!(stats.is_complete());
        assert_eq!(FetchStats::default().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_counts_outcomes() {
        let progress = FetchProgress::new(3, false);
        progress.inc_appended();
        progress.inc_appended();
        progress.inc_failed();
        progress.finish();

        let stats = progress.get_stats();
        assert_eq!(stats.requested, 3);
        assert_eq!(stats.appended, 2);
        assert_eq!(stats.failed, 1);
        assert!(stats.is_complete());
    }
}
