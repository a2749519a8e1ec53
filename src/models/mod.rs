//! Data models for the CEP proxy application
//!
//! The wire format follows ViaCEP's field names (`logradouro`, `bairro`,
//! `localidade`, `uf`) so that cached records round-trip byte-for-byte
//! with what the upstream API returns.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An address record as returned by ViaCEP.
///
/// Fields the proxy actively works with are typed; anything else the
/// upstream includes (`complemento`, `ibge`, `ddd`, ...) is preserved in
/// `extra` and passed through untouched. Records are immutable once
/// cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Postal code in ViaCEP's display form, e.g. `01001-000`
    #[serde(default)]
    pub cep: String,

    /// Street name
    #[serde(rename = "logradouro", default)]
    pub street: String,

    /// Neighborhood
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,

    /// City
    #[serde(rename = "localidade", default)]
    pub city: String,

    /// Two-letter state code
    #[serde(rename = "uf", default)]
    pub state: String,

    /// Passthrough for any other upstream fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[value(name = "asc")]
    Asc,
    #[value(name = "desc")]
    Desc,
}

/// A single sortable field of an [`AddressRecord`].
///
/// Used by the CLI client's local sorter; names match the wire fields the
/// original web UI offered in its sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    #[value(name = "cep")]
    Cep,
    #[value(name = "logradouro")]
    Street,
    #[value(name = "bairro")]
    Neighborhood,
    #[value(name = "localidade")]
    City,
    #[value(name = "uf")]
    State,
}

impl SortField {
    /// Project the field's value out of a record.
    pub fn value_of<'a>(&self, record: &'a AddressRecord) -> &'a str {
        match self {
            SortField::Cep => &record.cep,
            SortField::Street => &record.street,
            SortField::Neighborhood => &record.neighborhood,
            SortField::City => &record.city,
            SortField::State => &record.state,
        }
    }
}
