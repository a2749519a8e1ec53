//! Address source handling
//!
//! The proxy treats the upstream address API as an opaque collaborator
//! behind the [`AddressSource`] trait; the one production implementation
//! is [`ViaCepClient`]. Services and handlers only ever see the trait, so
//! tests swap in canned sources without touching the network.

pub mod traits;
pub mod viacep;

pub use traits::AddressSource;
pub use viacep::ViaCepClient;
