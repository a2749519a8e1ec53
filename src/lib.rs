pub mod cache;
pub mod cep;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod sources;
pub mod web;

pub use cache::AddressCache;
pub use cep::Cep;
pub use errors::{AppError, AppResult};
pub use models::AddressRecord;
