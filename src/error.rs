use thiserror::Error;

use crate::country::VatCountry;

/// Errors from the typed parsing surface.
///
/// The boolean [`validate_vat_number`](crate::validate_vat_number) path
/// never produces these; every negative outcome collapses to `false`
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatIdError {
    /// Fewer than two characters remain after separator stripping.
    #[error("'{0}' is too short to carry a country prefix")]
    TooShort(String),

    /// The 2-letter prefix matches no supported jurisdiction.
    #[error("unsupported country prefix in '{0}'")]
    UnsupportedCountry(String),

    /// The jurisdiction's format or check digit verification failed.
    #[error("'{value}' is not a valid {country} VAT registration number")]
    InvalidNumber {
        /// Jurisdiction whose rule rejected the number.
        country: VatCountry,
        /// The separator-stripped input.
        value: String,
    },
}
