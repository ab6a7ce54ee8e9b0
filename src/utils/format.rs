// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
//
// This file provides utility functions for formatting miner statistics for
// the log dashboard: reward amounts, durations and counters.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting miner statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format a token amount with four decimals, as shown on the wallet page
    pub fn format_amount(amount: f64) -> String {
        format!("{:.4}", amount)
    }

    /// Format duration for human-readable output (seconds, minutes, hours)
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Percentage of `part` in `total`, 0 when there is no total
    pub fn format_ratio(part: u64, total: u64) -> String {
        if total == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", part as f64 / total as f64 * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(FormatUtils::format_amount(0.015), "0.0150");
        assert_eq!(FormatUtils::format_amount(12450.0), "12450.0000");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(7260)), "2h 1m");
    }

    #[test]
    fn test_format_number_and_ratio() {
        assert_eq!(FormatUtils::format_number(999), "999");
        assert_eq!(FormatUtils::format_number(1_500), "1.5K");
        assert_eq!(FormatUtils::format_number(2_000_000), "2.0M");
        assert_eq!(FormatUtils::format_ratio(1, 4), "25.0%");
        assert_eq!(FormatUtils::format_ratio(0, 0), "0.0%");
    }
}

// Changelog:
// - v1.1.0 (2026-09-28): Formatting for the Helios dashboard.
//   - Amount, duration, count and ratio helpers.
