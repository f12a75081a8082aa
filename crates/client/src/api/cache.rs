//! Cache profiles and value types for API responses.
//!
//! Data-fetching results are cached by key (entity type + filter) with
//! time-based staleness windows that differ by surface: the shop catalog
//! tolerates 5 minutes, the admin console only 1. Entries are invalidated
//! explicitly after successful mutations, never by polling.

use std::time::Duration;

use moka::future::Cache;

use crate::types::{Pet, PetPage, Product, ProductPage};

/// Staleness tolerance for a repository's cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheProfile {
    /// Shop catalog reads: 5-minute TTL.
    Catalog,
    /// Admin console reads: 1-minute TTL.
    Admin,
}

impl CacheProfile {
    /// Time-to-live for cached entries under this profile.
    #[must_use]
    pub const fn ttl(self) -> Duration {
        match self {
            Self::Catalog => Duration::from_secs(300),
            Self::Admin => Duration::from_secs(60),
        }
    }
}

/// Cached value types.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    Product(Box<Product>),
    ProductPage(ProductPage),
    Pet(Box<Pet>),
    PetPage(PetPage),
}

/// Build a response cache for the given profile.
pub(crate) fn build_cache(profile: CacheProfile) -> Cache<String, CacheValue> {
    Cache::builder()
        .max_capacity(1000)
        .time_to_live(profile.ttl())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ttls() {
        assert_eq!(CacheProfile::Catalog.ttl(), Duration::from_secs(300));
        assert_eq!(CacheProfile::Admin.ttl(), Duration::from_secs(60));
    }
}
