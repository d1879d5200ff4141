//! Slovenia: 8 digits (no leading zero), weighted mod 11; a remainder of
//! zero has no valid check digit.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "SI") else {
        return false;
    };
    if body.len() != 8 || body[0] == b'0' {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let total: u32 = d
        .iter()
        .take(7)
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (8 - i as u32))
        .sum();
    let mut check = 11 - total % 11;
    if check == 10 {
        check = 0;
    }
    check != 11 && check == u32::from(d[7])
}
