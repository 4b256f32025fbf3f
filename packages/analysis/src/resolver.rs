//! Crime type resolution with a caller-owned cache.
//!
//! Crime type IDs are resolved to human-readable descriptions via the
//! types endpoint. Successful lookups are cached for the lifetime of the
//! [`CrimeTypeCache`] (it never evicts). A failed lookup yields the
//! synthetic [`CrimeTypeInfo::fallback`] placeholder instead of an error,
//! and the fallback is not cached, so a later call retries the lookup.

use std::collections::HashMap;

use crime_risk_analysis_models::CrimeTypeInfo;
use crime_risk_client::{ApiClient, ClientError};

/// Cache of resolved crime types, keyed by ID.
///
/// Owned by the caller and passed into [`resolve_crime_type`] — there is
/// no process-wide cache.
#[derive(Debug, Default)]
pub struct CrimeTypeCache {
    entries: HashMap<i64, CrimeTypeInfo>,
}

impl CrimeTypeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached entry for an ID, if any.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&CrimeTypeInfo> {
        self.entries.get(&id)
    }

    /// Stores a resolved crime type under its own ID.
    pub fn insert(&mut self, info: CrimeTypeInfo) {
        self.entries.insert(info.id, info);
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches a crime type from the types endpoint.
///
/// # Errors
///
/// Returns [`ClientError`] if the request fails, the API answers with a
/// non-2xx status, or the payload doesn't match [`CrimeTypeInfo`].
pub async fn fetch_crime_type(
    client: &ApiClient,
    id: i64,
) -> Result<CrimeTypeInfo, ClientError> {
    let value = client
        .get_json(&format!("/api/v1/criminal/types/{id}"))
        .await?;
    serde_json::from_value(value).map_err(|e| ClientError::Decode {
        message: e.to_string(),
    })
}

/// Resolves a crime type ID, consulting the cache first.
///
/// On a cache miss the type is fetched and cached. Any lookup failure is
/// logged and recovered with the synthetic fallback — a single failed
/// lookup must never abort the surrounding analysis.
pub async fn resolve_crime_type(
    client: &ApiClient,
    cache: &mut CrimeTypeCache,
    id: i64,
) -> CrimeTypeInfo {
    if let Some(info) = cache.get(id) {
        log::debug!("crime type {id}: cache hit");
        return info.clone();
    }

    match fetch_crime_type(client, id).await {
        Ok(info) => {
            cache.insert(info.clone());
            info
        }
        Err(e) => {
            log::warn!("crime type {id}: lookup failed, using fallback: {e}");
            CrimeTypeInfo::fallback(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use crime_risk_client::ApiConfig;

    use super::*;

    /// A client whose base URL cannot form a valid request, so every
    /// lookup fails without touching the network.
    fn unreachable_client() -> ApiClient {
        ApiClient::new(ApiConfig {
            api_key: "test-key".to_string(),
            base_url: "not a url".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn cache_stores_and_returns_entries() {
        let mut cache = CrimeTypeCache::new();
        assert!(cache.is_empty());

        cache.insert(CrimeTypeInfo {
            id: 7,
            description: "Roubo de carga".to_string(),
            score: 4,
        });

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(7).unwrap().description, "Roubo de carga");
        assert!(cache.get(8).is_none());
    }

    #[tokio::test]
    async fn cached_entry_short_circuits_the_lookup() {
        let client = unreachable_client();
        let mut cache = CrimeTypeCache::new();
        cache.insert(CrimeTypeInfo {
            id: 3,
            description: "Furto de veículo".to_string(),
            score: 3,
        });

        // The client can't issue requests, so this only passes if the
        // cache is consulted first.
        let info = resolve_crime_type(&client, &mut cache, 3).await;
        assert_eq!(info.description, "Furto de veículo");
    }

    #[tokio::test]
    async fn failed_lookup_falls_back_and_is_not_cached() {
        let client = unreachable_client();
        let mut cache = CrimeTypeCache::new();

        let info = resolve_crime_type(&client, &mut cache, 12).await;
        assert_eq!(info, CrimeTypeInfo::fallback(12));
        assert_eq!(info.description, "Crime Type #12");
        assert_eq!(info.score, 1);

        // Fallbacks are not cached, so the next call retries.
        assert!(cache.is_empty());
    }
}
