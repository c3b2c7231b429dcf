//! Per-IP rate limiting.
//!
//! Token buckets from `governor`, one limiter per remote IP, stored in a
//! `DashMap`. Two quotas: a general API budget and a stricter one for the
//! public verification endpoint.

use dashmap::DashMap;
use governor::{Quota, RateLimiter as GovRateLimiter};
use std::net::IpAddr;
use std::num::NonZeroU32;
use tracing::debug;

type DirectRateLimiter = governor::DefaultDirectRateLimiter;

// Grown-unbounded maps get wiped wholesale; per-IP buckets refill fast
// enough that a reset is harmless.
const MAX_TRACKED_IPS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    /// General API budget per IP and hour.
    pub api_per_hour: u32,
    /// Burst allowance on the general budget.
    pub api_burst: u32,
    /// `/api/verify` attempts per IP and hour.
    pub verify_per_hour: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        // 100 requests per 15 minutes, 50 verification attempts per hour.
        Self {
            api_per_hour: 400,
            api_burst: 100,
            verify_per_hour: 50,
        }
    }
}

pub struct RateLimitManager {
    api_limiters: DashMap<IpAddr, DirectRateLimiter>,
    verify_limiters: DashMap<IpAddr, DirectRateLimiter>,
    settings: RateLimitSettings,
}

impl RateLimitManager {
    pub fn new(settings: RateLimitSettings) -> Self {
        Self {
            api_limiters: DashMap::new(),
            verify_limiters: DashMap::new(),
            settings,
        }
    }

    /// Check the general API budget. `true` means allowed.
    pub fn check_api(&self, ip: IpAddr) -> bool {
        self.enforce_cap();
        let limiter = self.api_limiters.entry(ip).or_insert_with(|| {
            let rate = NonZeroU32::new(self.settings.api_per_hour)
                .unwrap_or(NonZeroU32::new(400).unwrap());
            let burst = NonZeroU32::new(self.settings.api_burst)
                .unwrap_or(NonZeroU32::new(100).unwrap());
            GovRateLimiter::direct(Quota::per_hour(rate).allow_burst(burst))
        });

        let allowed = limiter.check().is_ok();
        if !allowed {
            debug!(ip = %ip, "api rate limit exceeded");
        }
        allowed
    }

    /// Check the stricter verification budget. `true` means allowed.
    pub fn check_verify(&self, ip: IpAddr) -> bool {
        self.enforce_cap();
        let limiter = self.verify_limiters.entry(ip).or_insert_with(|| {
            let rate = NonZeroU32::new(self.settings.verify_per_hour)
                .unwrap_or(NonZeroU32::new(50).unwrap());
            GovRateLimiter::direct(Quota::per_hour(rate))
        });

        let allowed = limiter.check().is_ok();
        if !allowed {
            debug!(ip = %ip, "verification rate limit exceeded");
        }
        allowed
    }

    fn enforce_cap(&self) {
        if self.api_limiters.len() > MAX_TRACKED_IPS {
            self.api_limiters.clear();
            debug!("cleared api rate limiters (exceeded {} entries)", MAX_TRACKED_IPS);
        }
        if self.verify_limiters.len() > MAX_TRACKED_IPS {
            self.verify_limiters.clear();
            debug!("cleared verify rate limiters (exceeded {} entries)", MAX_TRACKED_IPS);
        }
    }
}

impl Default for RateLimitManager {
    fn default() -> Self {
        Self::new(RateLimitSettings::default())
    }
}
