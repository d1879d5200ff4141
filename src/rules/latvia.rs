//! Latvia: 11 digits, shared between natural persons and legal entities.
//!
//! Natural person numbers open with a DDMM birth date and are accepted on
//! structural plausibility alone, including the Feb-29 leap check on the
//! embedded two-digit year. Everything else falls through to the legal
//! entity checksum with its remainder-dependent remap.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const LEGAL_WEIGHTS: [u32; 10] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "LV") else {
        return false;
    };
    if body.len() != 11 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    if is_plausible_birth_date(&d) {
        return true;
    }
    validate_legal_entity(&d)
}

fn is_plausible_birth_date(d: &[u8]) -> bool {
    if d[0] > 3 || (d[0] == 3 && d[1] > 1) {
        return false;
    }
    let day = u32::from(d[0]) * 10 + u32::from(d[1]);

    if d[2] > 1 || (d[2] == 0 && d[3] == 0) || (d[2] == 1 && d[3] > 2) {
        return false;
    }
    let month = u32::from(d[2]) * 10 + u32::from(d[3]);

    match month {
        2 => {
            if day > 29 {
                return false;
            }
            if day == 29 {
                let year = u32::from(d[4]) * 10 + u32::from(d[5]);
                return year % 4 == 0;
            }
            true
        }
        4 | 6 | 9 | 11 => day < 31,
        _ => true,
    }
}

fn validate_legal_entity(d: &[u8]) -> bool {
    let mut total = weighted_sum(&d[..10], &LEGAL_WEIGHTS) as i32;
    if total % 11 == 4 && d[0] == 9 {
        total -= 45;
    }
    let check = match total % 11 {
        4 => 0,
        m if m > 4 => 14 - m,
        m => 3 - m,
    };
    check == i32::from(d[10])
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_legal_entities() {
        for vat in ["LV40003009497", "LV16117519997"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn natural_person_accepted_on_birth_date() {
        assert!(validate("LV07091910933"));
    }

    #[test]
    fn leap_day_needs_a_leap_year() {
        assert!(validate("LV29026412345"));
        assert!(!validate("LV29027512345"));
    }

    #[test]
    fn day_out_of_range_falls_to_legal_checksum() {
        // April has 30 days; the legal entity checksum does not match
        // either, so the whole number is rejected.
        assert!(!validate("LV31041212345"));
    }

    #[test]
    fn invalid_numbers() {
        for vat in ["LV40003009496", "LV4000300949", "LV400030094970"] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
