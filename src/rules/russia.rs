//! Russia: 10-digit legal entity INN or 12-digit individual INN.
//!
//! Every check value is a weighted sum reduced mod 11, with results above
//! 9 folded mod 10. The 12-digit form carries two chained check digits,
//! each over its own weight vector.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const WEIGHTS_TEN: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
const WEIGHTS_ELEVEN: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const WEIGHTS_TWELVE: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

fn check_value(digits: &[u8], weights: &[u32]) -> u32 {
    let total = weighted_sum(digits, weights) % 11;
    if total > 9 { total % 10 } else { total }
}

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "RU") else {
        return false;
    };
    let Some(d) = digit_values(body) else {
        return false;
    };

    match d.len() {
        10 => check_value(&d[..9], &WEIGHTS_TEN) == u32::from(d[9]),
        12 => {
            check_value(&d[..10], &WEIGHTS_ELEVEN) == u32::from(d[10])
                && check_value(&d[..11], &WEIGHTS_TWELVE) == u32::from(d[11])
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_ten_digit() {
        for vat in ["RU7830002293", "RU7728168971"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn valid_twelve_digit() {
        assert!(validate("RU500100732259"));
    }

    #[test]
    fn invalid_numbers() {
        for vat in [
            "RU7830002294",
            "RU772908924913",
            "RU78300022931",
            "RU783000229",
        ] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
