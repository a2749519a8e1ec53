//! CEP lookup service
//!
//! Normalize, consult the cache, fall through to the upstream source,
//! remember the answer. No retries and no TTL; a record fetched once is
//! served from memory for the rest of the process lifetime.

use std::sync::Arc;

use tracing::info;

use crate::cache::AddressCache;
use crate::cep::Cep;
use crate::errors::AppResult;
use crate::models::AddressRecord;
use crate::sources::AddressSource;

/// Resolves raw CEP strings to address records, caching every success.
#[derive(Clone)]
pub struct LookupService {
    cache: AddressCache,
    source: Arc<dyn AddressSource>,
}

impl LookupService {
    pub fn new(cache: AddressCache, source: Arc<dyn AddressSource>) -> Self {
        Self { cache, source }
    }

    /// Look up an address by raw CEP input.
    ///
    /// Invalid input fails before any upstream traffic; a cache hit never
    /// reaches the upstream either, so the source is called at most once
    /// per distinct CEP.
    pub async fn lookup(&self, raw: &str) -> AppResult<AddressRecord> {
        let cep = Cep::parse(raw)?;

        if let Some(record) = self.cache.get(cep.key()) {
            info!("CEP {} served from cache", cep);
            return Ok(record);
        }

        let record = self.source.fetch(&cep).await?;
        let stored = self.cache.insert(cep.key(), record);
        info!("CEP {} stored in cache", cep);
        Ok(stored)
    }
}
