//! Parsed, canonicalized VAT registration numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::country::VatCountry;
use crate::error::VatIdError;

/// A VAT registration number that passed its jurisdiction's rule.
///
/// The stored form is canonical: separators stripped, the 2-letter prefix
/// uppercased, the body left exactly as entered (check letters are
/// case-sensitive in several jurisdictions).
///
/// Serializes as the canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VatId {
    country: VatCountry,
    number: String,
}

impl VatId {
    /// Parse and verify a VAT registration number.
    ///
    /// Succeeds exactly when [`validate_vat_number`](crate::validate_vat_number)
    /// returns `true` for the same input.
    pub fn parse(input: &str) -> Result<Self, VatIdError> {
        let stripped = crate::strip_separators(input);
        let prefix: String = stripped.chars().take(2).collect();
        if prefix.chars().count() < 2 {
            return Err(VatIdError::TooShort(stripped));
        }
        let Some(country) = VatCountry::from_code(&prefix) else {
            return Err(VatIdError::UnsupportedCountry(stripped));
        };
        if !country.validate(&stripped) {
            return Err(VatIdError::InvalidNumber {
                country,
                value: stripped,
            });
        }

        let number = stripped
            .chars()
            .enumerate()
            .map(|(i, c)| if i < 2 { c.to_ascii_uppercase() } else { c })
            .collect();
        Ok(Self { country, number })
    }

    /// The jurisdiction that issued this number.
    pub fn country(&self) -> VatCountry {
        self.country
    }

    /// The canonical number, prefix included.
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// The body following the 2-letter prefix.
    pub fn body(&self) -> &str {
        &self.number[2..]
    }
}

impl fmt::Display for VatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl FromStr for VatId {
    type Err = VatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VatId {
    type Error = VatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VatId> for String {
    fn from(id: VatId) -> Self {
        id.number
    }
}
