//! The cross-border `EU` scheme for non-union businesses: 9 digits with
//! no published check algorithm, accepted on format alone.

use super::strip_prefix_ci;

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "EU") else {
        return false;
    };
    body.len() == 9 && body.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_numbers() {
        for vat in ["EU123456789", "eu123456789"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for vat in ["EU12345678", "EU1234567890", "EU12345678A"] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
