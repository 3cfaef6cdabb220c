//! Rate source trait and test implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::error::RateResult;

/// Trait for exchange rate sources.
///
/// Implementations own their transport, retries and backoff; callers only
/// see the resulting rate or an I/O failure.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Get the current rate for a currency.
    async fn get_rate(&self, currency: &Currency) -> RateResult<Decimal>;
}

/// Mock rate source for testing.
///
/// Serves canned per-currency rates, counts invocations, and can be switched
/// into a failing state to simulate a source outage. A currency with no
/// canned rate behaves like a lookup against an unreachable upstream.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateSource {
    rates: dashmap::DashMap<String, Decimal>,
    failing: std::sync::atomic::AtomicBool,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateSource {
    /// Create a new mock source with no rates.
    pub fn new() -> Self {
        Self {
            rates: dashmap::DashMap::new(),
            failing: std::sync::atomic::AtomicBool::new(false),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Set the rate returned for a currency.
    pub fn set_rate(&self, currency: Currency, rate: Decimal) {
        self.rates.insert(currency.code().to_string(), rate);
    }

    /// Make subsequent calls fail with an I/O error.
    pub fn set_failing(&self, failing: bool) {
        self.failing
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }

    /// Number of times `get_rate` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MockRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateSource for MockRateSource {
    async fn get_rate(&self, currency: &Currency) -> RateResult<Decimal> {
        use crate::error::RateError;

        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if self.failing.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(RateError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "simulated source outage",
            )));
        }

        match self.rates.get(currency.code()) {
            Some(rate) => Ok(*rate),
            None => Err(RateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no rate for {}", currency),
            ))),
        }
    }
}
