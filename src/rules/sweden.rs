//! Sweden: 10-digit organisation number followed by the fixed `01` site
//! suffix, with a Luhn check over the organisation digits.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "SE") else {
        return false;
    };
    if body.len() != 12 || body[10] != b'0' || body[11] != b'1' {
        return false;
    }
    let Some(d) = digit_values(&body[..10]) else {
        return false;
    };

    let doubled: u32 = d
        .iter()
        .step_by(2)
        .map(|&dig| {
            let v = u32::from(dig);
            u32::from(v >= 5) + (v * 2) % 10
        })
        .sum();
    let plain: u32 = d[1..8].iter().step_by(2).map(|&dig| u32::from(dig)).sum();

    (10 - (doubled + plain) % 10) % 10 == u32::from(d[9])
}
