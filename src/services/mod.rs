//! Business logic services
//!
//! Thin, injectable services sitting between the web layer and the cache
//! plus upstream source. Both are constructed once in `main` and cloned
//! into the shared application state.

pub mod listing;
pub mod lookup;

pub use listing::ListingService;
pub use lookup::LookupService;
