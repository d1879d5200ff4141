//! # ustid
//!
//! Offline VAT registration number validation for 30+ jurisdictions: the
//! EU member states, the United Kingdom, Norway, Switzerland, Serbia and
//! Russia, plus the generic cross-border `EU` scheme.
//!
//! Validation is purely syntactic and arithmetic. Every jurisdiction's
//! format and check digit algorithm runs locally; there is no registry
//! lookup, so a `true` result means "self-consistent", not "registered to
//! a real taxpayer". For a live registry check, query VIES or the national
//! authority with a number that passed here first.
//!
//! ## Quick Start
//!
//! ```rust
//! use ustid::{VatCountry, VatId, validate_vat_number};
//!
//! // The flat boolean check: separators and prefix casing are forgiven.
//! assert!(validate_vat_number("DE 136 695 976"));
//! assert!(validate_vat_number("atu12345675"));
//! assert!(!validate_vat_number("DE136695970"));
//!
//! // The typed surface keeps the country and the canonical form.
//! let id = VatId::parse("be 1234.567.894").unwrap();
//! assert_eq!(id.country(), VatCountry::Belgium);
//! assert_eq!(id.as_str(), "BE1234567894");
//! ```

mod checksum;
mod country;
mod error;
mod rules;
mod vat_id;

pub use country::VatCountry;
pub use error::VatIdError;
pub use vat_id::VatId;

/// Characters ignored everywhere in the input.
const SEPARATORS: [char; 5] = [' ', '.', ',', '_', '-'];

pub(crate) fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Check a VAT registration number against its jurisdiction's rule.
///
/// Separator characters (space, `.`, `,`, `_`, `-`) are stripped, the
/// first two remaining characters select the jurisdiction (ASCII
/// case-insensitively), and that jurisdiction's format and check digit
/// rule decides. Unknown prefixes, malformed bodies and failed checksums
/// all come back as `false`; the function never panics.
pub fn validate_vat_number(input: &str) -> bool {
    let vat = strip_separators(input);
    let prefix: String = vat.chars().take(2).collect();
    match VatCountry::from_code(&prefix) {
        Some(country) => country.validate(&vat),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_prefix() {
        assert!(validate_vat_number("DE136695976"));
        assert!(validate_vat_number("EU123456789"));
        assert!(!validate_vat_number("XX123456789"));
    }

    #[test]
    fn short_and_empty_input() {
        assert!(!validate_vat_number(""));
        assert!(!validate_vat_number("D"));
        assert!(!validate_vat_number("DE"));
        assert!(!validate_vat_number(" .,_-"));
    }

    #[test]
    fn non_ascii_input_is_rejected_quietly() {
        assert!(!validate_vat_number("ÄT12345675"));
        assert!(!validate_vat_number("Ä"));
        assert!(!validate_vat_number("DÉ136695976"));
    }

    #[test]
    fn separators_are_stripped_anywhere() {
        assert!(validate_vat_number("D-E.1,3_6 695976"));
    }
}
