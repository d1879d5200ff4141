//! Netherlands: the classic 9-digit + `B` + 2-digit layout with a weighted
//! mod 11 check, and the 2020 sole proprietor scheme.
//!
//! Sole proprietor numbers translate every character (prefix included)
//! into its numeric value over a 38-symbol alphabet and require the
//! resulting decimal string to be congruent to 1 mod 97, folded seven
//! digits at a time. A standard-shaped number that fails the mod 11 check
//! is still given the mod 97 trial, as the issuing scheme allows.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "NL") else {
        return false;
    };
    if body.len() != 12 {
        return false;
    }

    if is_standard_shape(body) && validate_standard(body) {
        return true;
    }
    if is_sole_proprietor_shape(body) {
        return validate_sole_proprietor(vat);
    }
    false
}

fn is_standard_shape(body: &[u8]) -> bool {
    body[..9].iter().all(u8::is_ascii_digit)
        && body[9].to_ascii_uppercase() == b'B'
        && body[10..].iter().all(u8::is_ascii_digit)
}

fn validate_standard(body: &[u8]) -> bool {
    let d = match digit_values(&body[..9]) {
        Some(d) => d,
        None => return false,
    };
    let total: u32 = d
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (9 - i as u32))
        .sum();
    total % 11 == u32::from(d[8])
}

fn is_sole_proprietor_shape(body: &[u8]) -> bool {
    body[..10]
        .iter()
        .all(|&c| c.is_ascii_alphanumeric() || c == b'*' || c == b'+')
        && body[10..].iter().all(u8::is_ascii_digit)
}

fn validate_sole_proprietor(vat: &str) -> bool {
    // The whole identifier, country prefix included, feeds the check.
    let mut expanded = String::with_capacity(vat.len() * 2);
    for c in vat.bytes().map(|c| c.to_ascii_uppercase()) {
        let value = match c {
            b'*' => 36,
            b'+' => 37,
            b'0'..=b'9' => u32::from(c - b'0'),
            b'A'..=b'Z' => u32::from(c - b'A') + 10,
            _ => return false,
        };
        expanded.push_str(&value.to_string());
    }

    while expanded.len() > 7 {
        let head: u32 = match expanded[..7].parse() {
            Ok(n) => n,
            Err(_) => return false,
        };
        expanded = format!("{}{}", head % 97, &expanded[7..]);
    }
    expanded.parse::<u32>().is_ok_and(|n| n % 97 == 1)
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_standard_numbers() {
        assert!(validate("NL004495445B01"));
    }

    #[test]
    fn standard_shape_rescued_by_mod97() {
        // The mod 11 check fails for these, the sole proprietor check
        // passes.
        for vat in ["NL002455799B11", "NL123456789B13"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn valid_sole_proprietor() {
        assert!(validate("NLABC123456744"));
        assert!(validate("nlabc123456744"));
    }

    #[test]
    fn invalid_numbers() {
        for vat in [
            "NLA12345678B12",
            "NL123456789B",
            "NL123456789B123",
            "NL1234|6789B12",
        ] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
