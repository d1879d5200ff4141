//! Denmark: 8 digits whose full weighted sum is a multiple of 11.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const WEIGHTS: [u32; 8] = [2, 7, 6, 5, 4, 3, 2, 1];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "DK") else {
        return false;
    };
    if body.len() != 8 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    weighted_sum(&d, &WEIGHTS) % 11 == 0
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_numbers() {
        for vat in ["DK88146328", "DK13585628", "DK10000009"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for vat in ["DK88146327", "DK8814632", "DK881463280", "DK8814632A"] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
