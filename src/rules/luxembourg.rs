//! Luxembourg: 8 digits, last two congruent to the first six mod 89.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "LU") else {
        return false;
    };
    if body.len() != 8 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    to_number(&d[..6]) % 89 == to_number(&d[6..]) % 89
}
