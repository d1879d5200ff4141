//! Germany: 9 digits (no leading zero), ISO 7064 MOD 11,10 check digit.

use crate::checksum::mod11_10_product;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "DE") else {
        return false;
    };
    if body.len() != 9 || body[0] == b'0' {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let product = mod11_10_product(&d[..8]);
    let mut check = 11 - product;
    if check == 10 {
        check = 0;
    }
    check == u32::from(d[8])
}
