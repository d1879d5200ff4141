//! Slovakia: 10 digits, the whole number divisible by 11.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "SK") else {
        return false;
    };
    if body.len() != 10 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    to_number(&d) % 11 == 0
}
