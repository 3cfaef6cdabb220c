//! TTL-cached exchange rate lookup.
//!
//! Wraps any [`RateSource`] in a [`CachedRateProvider`] that remembers the
//! last fetched rate for a fixed 3-second window, so repeated lookups within
//! that window never reach the underlying source.
//!
//! # Features
//!
//! - Single-slot cache with a fixed 3-second TTL
//! - Transparent decorator: the wrapper is itself a [`RateSource`]
//! - Delegate failures pass through untouched and never disturb cached state
//!
//! # Example
//!
//! ```rust,ignore
//! use exrate_cache::{CachedRateProvider, Currency, RateSource};
//! use std::sync::Arc;
//!
//! let provider = CachedRateProvider::new(Arc::new(web_source));
//!
//! // First lookup fetches from the source, the second is served from cache.
//! let rate = provider.get_rate(&Currency::usd()).await?;
//! let again = provider.get_rate(&Currency::usd()).await?;
//! ```

pub mod cache;
pub mod currency;
pub mod error;
pub mod provider;

pub use cache::CachedRateProvider;
pub use currency::Currency;
pub use error::{RateError, RateResult};
pub use provider::RateSource;
