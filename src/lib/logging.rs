//! Logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly formatting for counts, percentages,
//! durations and rates, plus a timer that logs the start and completion of an operation.

use std::time::{Duration, Instant};

use crate::sequences::SequenceScan;

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use fgseq_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a fraction (0.0-1.0) as a percentage with the given number of decimal places.
///
/// # Examples
///
/// ```
/// use fgseq_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form (e.g., "45s", "2m 15s", "1h 30m").
///
/// # Examples
///
/// ```
/// use fgseq_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate, falling back to items per minute for slow rates.
///
/// # Examples
///
/// ```
/// use fgseq_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 items/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60)), "30.0 items/min");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} items/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} items/s", format_count(rate as u64))
    } else {
        let items_per_min = count as f64 / (secs / 60.0);
        format!("{items_per_min:.1} items/min")
    }
}

/// Logs a summary of repeat scans: how many sequences were reported and the longest runs seen.
#[allow(clippy::cast_precision_loss)]
pub fn log_scan_summary(scans: &[SequenceScan], reported: u64) {
    let total = scans.len() as u64;
    log::info!("Scan Summary:");
    log::info!("  Sequences scanned: {}", format_count(total));
    log::info!("  Sequences reported: {}", format_count(reported));
    if total > 0 {
        log::info!("  Report rate: {}", format_percent(reported as f64 / total as f64, 2));
    }

    let longest_homopolymer = scans.iter().map(|s| s.homopolymer.length).max().unwrap_or(0);
    let longest_dinuc = scans.iter().map(|s| s.dinuc.length).max().unwrap_or(0);
    log::info!("  Longest homopolymer: {longest_homopolymer}");
    log::info!("  Longest dinucleotide run: {longest_dinuc}");
}

/// Operation timing and summary helper.
///
/// # Examples
///
/// ```
/// use fgseq_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Scanning sequences");
/// // ... do work ...
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.start_time.elapsed();
        log::info!(
            "{} completed: {} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        );
    }
}
