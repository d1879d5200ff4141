//! Ireland: 7 digits + check letter, optionally a 9th series letter.
//!
//! The pre-2013 legacy layout (leading 7-9, a letter in second place) is
//! rearranged into the standard layout before the check runs. The check
//! letter is the weighted sum mod 23 mapped through A-W, with W standing
//! for zero; a trailing H or A series letter adds a fixed bonus.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "IE") else {
        return false;
    };

    let layout: Vec<u8> = if is_standard_layout(body) {
        body.to_vec()
    } else if is_legacy_layout(body) {
        // 0 + five trailing digits + the leading digit + check letter.
        let mut rearranged = vec![b'0'];
        rearranged.extend_from_slice(&body[2..7]);
        rearranged.push(body[0]);
        rearranged.push(body[7]);
        rearranged
    } else {
        return false;
    };

    let Some(d) = digit_values(&layout[..7]) else {
        return false;
    };
    let mut total: u32 = d
        .iter()
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (8 - i as u32))
        .sum();
    match layout.get(8) {
        Some(&b'H') => total += 72,
        Some(&b'A') => total += 9,
        _ => {}
    }
    total %= 23;

    let check = if total == 0 { b'W' } else { b'@' + total as u8 };
    check == layout[7]
}

fn is_check_letter(c: u8) -> bool {
    matches!(c.to_ascii_uppercase(), b'A'..=b'W')
}

fn is_standard_layout(body: &[u8]) -> bool {
    (body.len() == 8 || body.len() == 9)
        && body[..7].iter().all(u8::is_ascii_digit)
        && is_check_letter(body[7])
        && body
            .get(8)
            .is_none_or(|&c| matches!(c.to_ascii_uppercase(), b'A' | b'H'))
}

fn is_legacy_layout(body: &[u8]) -> bool {
    body.len() == 8
        && matches!(body[0], b'7'..=b'9')
        && body[1].is_ascii_alphabetic()
        && body[2..7].iter().all(u8::is_ascii_digit)
        && is_check_letter(body[7])
}
