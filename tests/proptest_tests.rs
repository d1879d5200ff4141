//! Property-based tests for the validation entry points.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use ustid::{VatId, validate_vat_number};

/// Arbitrary VAT-shaped input: a 2-letter prefix (any case) and a body of
/// digits, letters and the odd symbol.
fn vat_like() -> impl Strategy<Value = String> {
    ("[A-Za-z]{2}", "[0-9A-Za-z*+]{0,14}").prop_map(|(p, b)| format!("{p}{b}"))
}

proptest! {
    #[test]
    fn never_panics(input in ".{0,40}") {
        let _ = validate_vat_number(&input);
        let _ = VatId::parse(&input);
    }

    #[test]
    fn deterministic(input in ".{0,40}") {
        prop_assert_eq!(validate_vat_number(&input), validate_vat_number(&input));
    }

    #[test]
    fn separator_insertion_is_invariant(
        input in vat_like(),
        pos in 0usize..16,
        sep in prop::sample::select(vec![' ', '.', ',', '_', '-']),
    ) {
        let mut spaced = input.clone();
        spaced.insert(pos.min(input.len()), sep);
        prop_assert_eq!(validate_vat_number(&input), validate_vat_number(&spaced));
    }

    #[test]
    fn prefix_case_is_invariant(input in vat_like()) {
        let mut flipped: String = input[..2].to_ascii_lowercase();
        flipped.push_str(&input[2..]);
        prop_assert_eq!(validate_vat_number(&input), validate_vat_number(&flipped));

        let mut flipped: String = input[..2].to_ascii_uppercase();
        flipped.push_str(&input[2..]);
        prop_assert_eq!(validate_vat_number(&input), validate_vat_number(&flipped));
    }

    #[test]
    fn parse_agrees_with_validate(input in vat_like()) {
        prop_assert_eq!(VatId::parse(&input).is_ok(), validate_vat_number(&input));
    }

    #[test]
    fn accepted_numbers_reparse_canonically(input in vat_like()) {
        if let Ok(id) = VatId::parse(&input) {
            // The canonical form is itself valid and parses to itself.
            prop_assert!(validate_vat_number(id.as_str()));
            let again = VatId::parse(id.as_str()).unwrap();
            prop_assert_eq!(again, id);
        }
    }
}
