//! Switzerland: `CHE` + 9 digits, optionally suffixed with the VAT register
//! marker in one of the three federal languages (MWST, TVA, IVA).

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const WEIGHTS: [u32; 8] = [5, 4, 3, 2, 7, 6, 5, 4];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "CHE") else {
        return false;
    };
    let Some((digits, suffix)) = body.split_at_checked(9) else {
        return false;
    };
    let valid_suffix = suffix.is_empty()
        || suffix.eq_ignore_ascii_case(b"MWST")
        || suffix.eq_ignore_ascii_case(b"TVA")
        || suffix.eq_ignore_ascii_case(b"IVA");
    if !valid_suffix {
        return false;
    }
    let Some(d) = digit_values(digits) else {
        return false;
    };

    let total = (11 - weighted_sum(&d[..8], &WEIGHTS) % 11) % 11;
    if total == 10 {
        return false;
    }
    total == u32::from(d[8])
}
