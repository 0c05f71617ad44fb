// Copyright (c) 2025 - Cowboy AI, Inc.
//! Currency Value Object and Currency Context

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Currency code must be 3 characters: {0:?}")]
    InvalidLength(String),

    #[error("Currency code must be upper-case ASCII letters: {0:?}")]
    InvalidCharacter(String),
}

/// ISO 4217 currency code (e.g. `USD`, `EUR`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, CurrencyError> {
        let code = code.into();

        if code.len() != 3 {
            return Err(CurrencyError::InvalidLength(code));
        }

        if !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CurrencyError::InvalidCharacter(code));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Currency settings shared by every snapshot of one account refresh
///
/// Amounts are not converted here; snapshots only record which reference
/// currency a downstream converter would target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyContext {
    /// Reference currency for converted amounts, if conversion is enabled
    pub reference_currency: Option<Currency>,
}

impl CurrencyContext {
    pub fn new(reference_currency: Option<Currency>) -> Self {
        Self { reference_currency }
    }

    pub fn reference_currency(&self) -> Option<&Currency> {
        self.reference_currency.as_ref()
    }
}
