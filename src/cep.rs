//! CEP normalization and validation
//!
//! A CEP (Código de Endereçamento Postal) is an 8-digit Brazilian postal
//! code, conventionally displayed as `NNNNN-NNN`. User input arrives in
//! any punctuation the user felt like typing; everything downstream works
//! with the digit-only form, which is also the cache key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A validated CEP, held in its canonical digit-only form.
///
/// `Cep::parse` is the only way to construct one, so holding a `Cep`
/// guarantees the key is exactly 8 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cep(String);

impl Cep {
    /// Parse a raw user-supplied string into a validated CEP.
    ///
    /// All non-digit characters are stripped first, so `"01001-000"`,
    /// `"01001000"` and `"01.001 000"` all normalize to the same key.
    /// Fails unless exactly 8 digits remain.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 8 {
            return Err(AppError::InvalidCep);
        }
        Ok(Self(digits))
    }

    /// The digit-only canonical form, used as the cache key.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// The display form, `NNNNN-NNN`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
