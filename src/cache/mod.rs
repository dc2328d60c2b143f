//! Monster name caching with lazy TTL expiry and JSON persistence.

pub mod envelope;
pub mod name_cache;

pub use envelope::{now_millis, CacheEnvelope, EnvelopeCache};
pub use name_cache::{CacheStatus, NameCache, NameLookup};
