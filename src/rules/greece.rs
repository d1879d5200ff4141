//! Greece: `EL` + 8 or 9 digits, power-of-two weights mod 11.
//!
//! Eight-digit numbers from the older series are padded with a leading
//! zero before the check runs.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "EL") else {
        return false;
    };
    if !(body.len() == 8 || body.len() == 9) {
        return false;
    }
    let Some(mut d) = digit_values(body) else {
        return false;
    };
    if d.len() == 8 {
        d.insert(0, 0);
    }

    let mut total: u32 = d
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) << (8 - i))
        .sum::<u32>()
        % 11;
    if total > 9 {
        total = 0;
    }
    total == u32::from(d[8])
}
