//! Source trait definitions

use async_trait::async_trait;

use crate::cep::Cep;
use crate::errors::AppResult;
use crate::models::AddressRecord;

/// An external system of record for address data.
///
/// `fetch` resolves a validated CEP to a full address record. Expected
/// failure modes: the upstream's not-found marker (`AppError::CepNotFound`)
/// and transport or payload trouble (`AppError::Upstream`). Implementations
/// do not retry; the caller surfaces the failure as-is.
#[async_trait]
pub trait AddressSource: Send + Sync {
    async fn fetch(&self, cep: &Cep) -> AppResult<AddressRecord>;
}
