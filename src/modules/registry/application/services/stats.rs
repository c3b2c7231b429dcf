use chrono::{Duration, NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

// Counters older than the widest reporting window are dead weight.
const RETENTION_DAYS: i64 = 30;

#[derive(Default)]
struct DayCounters {
    attempts: AtomicU64,
    verified: AtomicU64,
}

/// In-process counters behind `GET /api/analytics`.
///
/// One entry per UTC day; the matcher records every attempt and whether it
/// resolved to a verified channel. Loses history on restart, which is fine
/// for a dashboard stat.
#[derive(Default)]
pub struct VerificationStats {
    days: DashMap<NaiveDate, DayCounters>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatsSnapshot {
    pub total_verifications: u64,
    pub verified_count: u64,
    pub today: u64,
    pub week: u64,
    pub month: u64,
}

impl VerificationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, verified: bool) {
        let today = Utc::now().date_naive();
        let counters = self.days.entry(today).or_default();
        counters.attempts.fetch_add(1, Ordering::Relaxed);
        if verified {
            counters.verified.fetch_add(1, Ordering::Relaxed);
        }
        drop(counters);

        let horizon = today - Duration::days(RETENTION_DAYS);
        self.days.retain(|day, _| *day >= horizon);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let today = Utc::now().date_naive();
        let week_start = today - Duration::days(6);
        let month_start = today - Duration::days(29);

        let mut snapshot = StatsSnapshot {
            total_verifications: 0,
            verified_count: 0,
            today: 0,
            week: 0,
            month: 0,
        };

        for entry in self.days.iter() {
            let attempts = entry.value().attempts.load(Ordering::Relaxed);
            let verified = entry.value().verified.load(Ordering::Relaxed);
            snapshot.total_verifications += attempts;
            snapshot.verified_count += verified;

            let day = *entry.key();
            if day == today {
                snapshot.today += attempts;
            }
            if day >= week_start {
                snapshot.week += attempts;
            }
            if day >= month_start {
                snapshot.month += attempts;
            }
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_attempts_and_hits() {
        let stats = VerificationStats::new();

        stats.record(true);
        stats.record(false);
        stats.record(true);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_verifications, 3);
        assert_eq!(snapshot.verified_count, 2);
        assert_eq!(snapshot.today, 3);
        assert_eq!(snapshot.week, 3);
        assert_eq!(snapshot.month, 3);
    }

    #[test]
    fn empty_stats_snapshot_is_zeroed() {
        let snapshot = VerificationStats::new().snapshot();
        assert_eq!(snapshot.total_verifications, 0);
        assert_eq!(snapshot.verified_count, 0);
        assert_eq!(snapshot.today, 0);
    }
}
