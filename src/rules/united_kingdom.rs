//! United Kingdom: standard 9-digit numbers (optionally extended to 12 for
//! branch traders), plus the GD and HA ranges for government departments
//! and health authorities.
//!
//! The weighted total is reduced mod 97 by repeated subtraction and tested
//! against two issuing eras: the original series with its excluded number
//! ranges, and the post-1996 series shifted by 55.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "GB") else {
        return false;
    };

    if body.len() >= 2 {
        let marker = &body[..2];
        if marker.eq_ignore_ascii_case(b"GD") || marker.eq_ignore_ascii_case(b"HA") {
            return validate_authority(marker, &body[2..]);
        }
    }

    if !(body.len() == 9 || body.len() == 12) {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };
    if to_number(&d) == 0 {
        return false;
    }

    let number = to_number(&d[..7]);
    let check = to_number(&d[7..9]);

    let mut total: i64 = d
        .iter()
        .take(7)
        .enumerate()
        .map(|(i, &dig)| i64::from(dig) * (8 - i as i64))
        .sum();
    while total > 0 {
        total -= 97;
    }
    total = -total;

    let first_era = total == check as i64
        && number < 9_990_001
        && !(100_000..=999_999).contains(&number)
        && !(9_490_001..=9_700_000).contains(&number);
    if first_era {
        return true;
    }

    let shifted = if total >= 55 { total - 55 } else { total + 42 };
    shifted == check as i64 && number > 1_000_000
}

fn validate_authority(marker: &[u8], rest: &[u8]) -> bool {
    if rest.len() != 3 {
        return false;
    }
    let Some(d) = digit_values(rest) else {
        return false;
    };
    let value = to_number(&d);
    if marker.eq_ignore_ascii_case(b"GD") {
        value < 500
    } else {
        value > 499
    }
}
