//! Supported jurisdictions and per-jurisdiction rule dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VatIdError;
use crate::rules;

/// A jurisdiction with a dedicated VAT number rule, plus the generic
/// cross-border `EU` scheme.
///
/// Greece registers VAT numbers under the `EL` prefix; `GR` matches no
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VatCountry {
    Austria,
    Belgium,
    Bulgaria,
    Croatia,
    Cyprus,
    CzechRepublic,
    Denmark,
    Estonia,
    Finland,
    France,
    Germany,
    Greece,
    Hungary,
    Ireland,
    Italy,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Romania,
    Russia,
    Serbia,
    Slovakia,
    Slovenia,
    Spain,
    Sweden,
    Switzerland,
    UnitedKingdom,
    /// Cross-border scheme for non-union businesses, format-only.
    EuropeanUnion,
}

impl VatCountry {
    /// Every supported jurisdiction, in prefix order.
    pub const ALL: [VatCountry; 33] = [
        Self::Austria,
        Self::Belgium,
        Self::Bulgaria,
        Self::Switzerland,
        Self::Cyprus,
        Self::CzechRepublic,
        Self::Germany,
        Self::Denmark,
        Self::Estonia,
        Self::Greece,
        Self::Spain,
        Self::EuropeanUnion,
        Self::Finland,
        Self::France,
        Self::UnitedKingdom,
        Self::Croatia,
        Self::Hungary,
        Self::Ireland,
        Self::Italy,
        Self::Lithuania,
        Self::Luxembourg,
        Self::Latvia,
        Self::Malta,
        Self::Netherlands,
        Self::Norway,
        Self::Poland,
        Self::Portugal,
        Self::Romania,
        Self::Serbia,
        Self::Russia,
        Self::Sweden,
        Self::Slovenia,
        Self::Slovakia,
    ];

    /// Resolve a 2-letter prefix, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// The registration prefix (ISO 3166-1 alpha-2 derived; Greece uses
    /// the `EL` prefix of the VIES convention).
    pub fn code(self) -> &'static str {
        match self {
            Self::Austria => "AT",
            Self::Belgium => "BE",
            Self::Bulgaria => "BG",
            Self::Croatia => "HR",
            Self::Cyprus => "CY",
            Self::CzechRepublic => "CZ",
            Self::Denmark => "DK",
            Self::Estonia => "EE",
            Self::Finland => "FI",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Greece => "EL",
            Self::Hungary => "HU",
            Self::Ireland => "IE",
            Self::Italy => "IT",
            Self::Latvia => "LV",
            Self::Lithuania => "LT",
            Self::Luxembourg => "LU",
            Self::Malta => "MT",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::Poland => "PL",
            Self::Portugal => "PT",
            Self::Romania => "RO",
            Self::Russia => "RU",
            Self::Serbia => "RS",
            Self::Slovakia => "SK",
            Self::Slovenia => "SI",
            Self::Spain => "ES",
            Self::Sweden => "SE",
            Self::Switzerland => "CH",
            Self::UnitedKingdom => "GB",
            Self::EuropeanUnion => "EU",
        }
    }

    /// English short name of the jurisdiction.
    pub fn name(self) -> &'static str {
        match self {
            Self::Austria => "Austria",
            Self::Belgium => "Belgium",
            Self::Bulgaria => "Bulgaria",
            Self::Croatia => "Croatia",
            Self::Cyprus => "Cyprus",
            Self::CzechRepublic => "Czech Republic",
            Self::Denmark => "Denmark",
            Self::Estonia => "Estonia",
            Self::Finland => "Finland",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::Hungary => "Hungary",
            Self::Ireland => "Ireland",
            Self::Italy => "Italy",
            Self::Latvia => "Latvia",
            Self::Lithuania => "Lithuania",
            Self::Luxembourg => "Luxembourg",
            Self::Malta => "Malta",
            Self::Netherlands => "Netherlands",
            Self::Norway => "Norway",
            Self::Poland => "Poland",
            Self::Portugal => "Portugal",
            Self::Romania => "Romania",
            Self::Russia => "Russia",
            Self::Serbia => "Serbia",
            Self::Slovakia => "Slovakia",
            Self::Slovenia => "Slovenia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Switzerland => "Switzerland",
            Self::UnitedKingdom => "United Kingdom",
            Self::EuropeanUnion => "European Union",
        }
    }

    /// Run this jurisdiction's rule against a separator-stripped number
    /// (country prefix included, casing untouched).
    pub fn validate(self, vat: &str) -> bool {
        match self {
            Self::Austria => rules::austria::validate(vat),
            Self::Belgium => rules::belgium::validate(vat),
            Self::Bulgaria => rules::bulgaria::validate(vat),
            Self::Croatia => rules::croatia::validate(vat),
            Self::Cyprus => rules::cyprus::validate(vat),
            Self::CzechRepublic => rules::czech_republic::validate(vat),
            Self::Denmark => rules::denmark::validate(vat),
            Self::Estonia => rules::estonia::validate(vat),
            Self::Finland => rules::finland::validate(vat),
            Self::France => rules::france::validate(vat),
            Self::Germany => rules::germany::validate(vat),
            Self::Greece => rules::greece::validate(vat),
            Self::Hungary => rules::hungary::validate(vat),
            Self::Ireland => rules::ireland::validate(vat),
            Self::Italy => rules::italy::validate(vat),
            Self::Latvia => rules::latvia::validate(vat),
            Self::Lithuania => rules::lithuania::validate(vat),
            Self::Luxembourg => rules::luxembourg::validate(vat),
            Self::Malta => rules::malta::validate(vat),
            Self::Netherlands => rules::netherlands::validate(vat),
            Self::Norway => rules::norway::validate(vat),
            Self::Poland => rules::poland::validate(vat),
            Self::Portugal => rules::portugal::validate(vat),
            Self::Romania => rules::romania::validate(vat),
            Self::Russia => rules::russia::validate(vat),
            Self::Serbia => rules::serbia::validate(vat),
            Self::Slovakia => rules::slovakia::validate(vat),
            Self::Slovenia => rules::slovenia::validate(vat),
            Self::Spain => rules::spain::validate(vat),
            Self::Sweden => rules::sweden::validate(vat),
            Self::Switzerland => rules::switzerland::validate(vat),
            Self::UnitedKingdom => rules::united_kingdom::validate(vat),
            Self::EuropeanUnion => rules::european_union::validate(vat),
        }
    }
}

impl fmt::Display for VatCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VatCountry {
    type Err = VatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| VatIdError::UnsupportedCountry(s.to_owned()))
    }
}
