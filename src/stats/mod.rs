use chrono::{DateTime, Duration, Utc};
use log::info;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { bytes: usize },
    Failed { status: Option<u16> },
}

#[derive(Debug, Clone)]
pub struct PipelineStats {
    pub start_time: DateTime<Utc>,
    pub total_fetches: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
    pub failed_saves: usize,
    pub records_parsed: usize,
    pub files_saved: usize,
    pub bytes_downloaded: usize,
    pub failure_statuses: HashMap<u16, usize>,
    pub fetches_by_language: HashMap<String, usize>,
    pub average_fetch_time: f64, // in milliseconds
}

/// Shared counters for the fetch-parse-save pipeline.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<PipelineStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(PipelineStats {
                start_time: Utc::now(),
                total_fetches: 0,
                successful_fetches: 0,
                failed_fetches: 0,
                failed_saves: 0,
                records_parsed: 0,
                files_saved: 0,
                bytes_downloaded: 0,
                failure_statuses: HashMap::new(),
                fetches_by_language: HashMap::new(),
                average_fetch_time: 0.0,
            })),
        }
    }

    pub fn record_fetch(&self, language: &str, outcome: FetchOutcome, duration: Duration) {
        let mut stats = self.stats.write();
        stats.total_fetches += 1;

        match outcome {
            FetchOutcome::Success { bytes } => {
                stats.successful_fetches += 1;
                stats.bytes_downloaded += bytes;
            }
            FetchOutcome::Failed { status } => {
                stats.failed_fetches += 1;
                if let Some(status) = status {
                    *stats.failure_statuses.entry(status).or_insert(0) += 1;
                }
            }
        }
        *stats
            .fetches_by_language
            .entry(language.to_string())
            .or_insert(0) += 1;

        // Update average fetch time
        let current_total = stats.average_fetch_time * (stats.total_fetches - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_fetch_time = (current_total + new_duration) / stats.total_fetches as f64;
    }

    pub fn record_parsed(&self, count: usize) {
        self.stats.write().records_parsed += count;
    }

    pub fn record_save(&self, ok: bool) {
        let mut stats = self.stats.write();
        if ok {
            stats.files_saved += 1;
        } else {
            stats.failed_saves += 1;
        }
    }

    pub fn get_stats(&self) -> PipelineStats {
        self.stats.read().clone()
    }

    pub fn log_summary(&self) {
        let stats = self.stats.read();
        let uptime = Utc::now().signed_duration_since(stats.start_time);

        info!(
            "Pipeline stats: uptime={}s fetches={} ok={} failed={} parsed={} saved={} save_failures={} downloaded={:.2}MB avg_fetch={:.2}ms",
            uptime.num_seconds(),
            stats.total_fetches,
            stats.successful_fetches,
            stats.failed_fetches,
            stats.records_parsed,
            stats.files_saved,
            stats.failed_saves,
            stats.bytes_downloaded as f64 / 1_000_000.0,
            stats.average_fetch_time
        );
        for (language, count) in &stats.fetches_by_language {
            info!("  {}: {} fetches", language, count);
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
