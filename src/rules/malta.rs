//! Malta: 8 digits (no leading zero), two-digit check value mod 37.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "MT") else {
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
        .take(6)
        .enumerate()
        .map(|(i, &dig)| {
            let weight = i as u32 + if i > 1 { 4 } else { 3 };
            u32::from(dig) * weight
        })
        .sum();
    let check = u32::from(d[6]) * 10 + u32::from(d[7]);
    37 - total % 37 == check
}
