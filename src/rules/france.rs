//! France: a 2-character key followed by the 9-digit SIREN.
//!
//! Numeric keys satisfy `key mod 97 == (12 + 3 * (siren mod 97)) mod 97`.
//! Keys containing a letter come from the newer non-sequential series and
//! carry no published check relation, so they pass on format alone.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "FR") else {
        return false;
    };
    if body.len() != 11 {
        return false;
    }
    let key = &body[..2];
    if !key.iter().all(u8::is_ascii_alphanumeric) {
        return false;
    }
    let Some(siren) = digit_values(&body[2..]) else {
        return false;
    };

    if key.iter().any(u8::is_ascii_alphabetic) {
        return true;
    }
    let key = u64::from(key[0] - b'0') * 10 + u64::from(key[1] - b'0');
    (12 + 3 * (to_number(&siren) % 97)) % 97 == key % 97
}
