//! Belgium: 10 digits, the last two being `97 - (first eight mod 97)`.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "BE") else {
        return false;
    };
    if body.len() != 10 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let number = to_number(&d[..8]);
    let check = to_number(&d[8..]);
    97 - number % 97 == check
}
