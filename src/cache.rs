//! Single-slot rate caching with a fixed TTL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::currency::Currency;
use crate::error::RateResult;
use crate::provider::RateSource;

/// How long a fetched rate stays fresh (3 seconds).
fn cache_ttl() -> Duration {
    Duration::seconds(3)
}

/// The one cached value and its expiry.
#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: Decimal,
    expires_at: DateTime<Utc>,
}

impl CachedRate {
    fn new(rate: Decimal, ttl: Duration) -> Self {
        Self {
            rate,
            expires_at: Utc::now() + ttl,
        }
    }

    fn is_fresh(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Caching decorator around a [`RateSource`].
///
/// Remembers the last fetched rate for 3 seconds and serves it for every
/// lookup inside that window. The cache holds exactly one slot: a lookup for
/// a *different* currency inside the window still returns the cached value,
/// whatever currency produced it. Callers that need per-currency freshness
/// must not share one instance across currencies.
///
/// The contract is sequential invocation. The slot sits behind a mutex, but
/// the lock is not held across the delegate call, so overlapping callers may
/// each trigger a refresh.
pub struct CachedRateProvider {
    source: Arc<dyn RateSource>,
    slot: Mutex<Option<CachedRate>>,
    ttl: Duration,
}

impl CachedRateProvider {
    /// Wrap a rate source. The cache starts empty.
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            slot: Mutex::new(None),
            ttl: cache_ttl(),
        }
    }

    /// Wrap with a shortened TTL so expiry tests need not sleep for seconds.
    #[cfg(test)]
    fn with_ttl(source: Arc<dyn RateSource>, ttl: Duration) -> Self {
        Self {
            source,
            slot: Mutex::new(None),
            ttl,
        }
    }

    fn fresh_rate(&self) -> Option<Decimal> {
        let slot = self.slot.lock();
        match *slot {
            Some(entry) if entry.is_fresh() => Some(entry.rate),
            _ => None,
        }
    }
}

#[async_trait]
impl RateSource for CachedRateProvider {
    async fn get_rate(&self, currency: &Currency) -> RateResult<Decimal> {
        if let Some(rate) = self.fresh_rate() {
            debug!(currency = %currency, "Cache hit");
            return Ok(rate);
        }

        debug!(currency = %currency, "Cache miss");
        let rate = self.source.get_rate(currency).await?;

        *self.slot.lock() = Some(CachedRate::new(rate, self.ttl));
        info!(currency = %currency, rate = %rate, "Cache updated");

        Ok(rate)
    }
}
