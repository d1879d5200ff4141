//! Spain: four NIF/CIF shapes behind one prefix.
//!
//! Juridical entities use a Luhn-style fold whose result maps either to a
//! letter (foreign and non-national forms) or a digit (national forms).
//! Personal numbers map the leading body mod 23 through a fixed letter
//! table, with Y and Z standing in for the digits 1 and 2 in the newer
//! foreigner series.

use crate::checksum::{double_fold_sum, to_number};

use super::{digit_values, strip_prefix_ci};

const NIF_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "ES") else {
        return false;
    };
    if body.len() != 9 {
        return false;
    }
    let first = body[0].to_ascii_uppercase();
    let last = body[8];

    // Juridical entities other than national ones: letter + 7 digits + A-J.
    if matches!(first, b'A'..=b'H' | b'N'..=b'S' | b'W')
        && matches!(last.to_ascii_uppercase(), b'A'..=b'J')
    {
        let Some(d) = digit_values(&body[1..8]) else {
            return false;
        };
        let check = 10 - double_fold_sum(&d, true) % 10;
        return b'@' + check as u8 == last;
    }

    // National juridical entities: letter + 8 digits.
    if first.is_ascii_alphabetic() && last.is_ascii_digit() {
        let Some(d) = digit_values(&body[1..]) else {
            return false;
        };
        let mut check = 10 - double_fold_sum(&d[..7], true) % 10;
        if check == 10 {
            check = 0;
        }
        return check == u32::from(d[7]);
    }

    // Personal NIF: digit or Y/Z, then 7 digits, then a check letter.
    if !last.is_ascii_alphabetic() {
        return false;
    }
    let Some(d) = digit_values(&body[1..8]) else {
        return false;
    };
    let number = match first {
        b'0'..=b'9' => u64::from(first - b'0') * 10_000_000 + to_number(&d),
        b'Y' => 10_000_000 + to_number(&d),
        b'Z' => 20_000_000 + to_number(&d),
        // K, L, M and X forms check only the 7 middle digits.
        b'K' | b'L' | b'M' | b'X' => to_number(&d),
        _ => return false,
    };
    NIF_LETTERS[(number % 23) as usize] == last
}
