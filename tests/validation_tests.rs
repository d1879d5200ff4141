use ustid::{VatCountry, VatId, VatIdError, validate_vat_number};

// ---------------------------------------------------------------------------
// Dispatcher behavior
// ---------------------------------------------------------------------------

#[test]
fn separator_invariance() {
    for vat in ["DE136695976", "DE 136695976", "DE-136-695-976", "DE.136,695_976"] {
        assert!(validate_vat_number(vat), "{vat}");
    }
}

#[test]
fn prefix_case_invariance() {
    assert_eq!(
        validate_vat_number("de136695976"),
        validate_vat_number("DE136695976")
    );
    assert!(validate_vat_number("aTu12345675"));
    assert!(validate_vat_number("gbGD001"));
}

#[test]
fn unknown_prefix_rejected() {
    for vat in ["XX123456789", "GR094259216", "XI123456789", "ZZ1"] {
        assert!(!validate_vat_number(vat), "{vat}");
    }
}

#[test]
fn degenerate_input_rejected() {
    assert!(!validate_vat_number(""));
    assert!(!validate_vat_number("-"));
    assert!(!validate_vat_number("德国136695976"));
}

// ---------------------------------------------------------------------------
// One accepted and one rejected number per jurisdiction
// ---------------------------------------------------------------------------

#[test]
fn every_jurisdiction_accepts_a_known_good_number() {
    for vat in [
        "ATU12345675",
        "BE1234567894",
        "BG101004508",
        "CHE116281710MWST",
        "CY10259033P",
        "CZ25123891",
        "DE136695976",
        "DK88146328",
        "EE100931558",
        "EL094259216",
        "ESB78640570",
        "EU123456789",
        "FI09853608",
        "FR40303265045",
        "GB980780684",
        "HR33392005961",
        "HU10597190",
        "IE6433435F",
        "IT00743110157",
        "LT119511515",
        "LU10000356",
        "LV40003009497",
        "MT11679112",
        "NL004495445B01",
        "NO974761076",
        "PL5260001246",
        "PT501964843",
        "RO18547290",
        "RS101134702",
        "RU7830002293",
        "SE556012579001",
        "SI50223054",
        "SK1234567895",
    ] {
        assert!(validate_vat_number(vat), "{vat}");
    }
}

#[test]
fn every_jurisdiction_rejects_a_corrupted_number() {
    for vat in [
        "ATU12345678",
        "BE1234567800",
        "BG101004509",
        "CHE105933766",
        "CY10259033A",
        "CZ25123890",
        "DE136695970",
        "DK88146327",
        "EE100931559",
        "EL094259217",
        "ESB78640571",
        "EU12345678",
        "FI09853607",
        "FR84323140391",
        "GB980780685",
        "HR33392005962",
        "HU10597191",
        "IE6433435E",
        "IT00743110158",
        "LT119511516",
        "LU10000355",
        "LV40003009496",
        "MT11679113",
        "NLA12345678B12",
        "NO974761077",
        "PL5262819575",
        "PT501964844",
        "RO26332986",
        "RS101695638",
        "RU7830002294",
        "SE556103424601",
        "SI50223055",
        "SK2020032378",
    ] {
        assert!(!validate_vat_number(vat), "{vat}");
    }
}

// ---------------------------------------------------------------------------
// Typed surface
// ---------------------------------------------------------------------------

#[test]
fn parse_agrees_with_the_boolean_check() {
    for vat in ["DE136695976", "ATU12345678", "XX123456789", "", "EU123456789"] {
        assert_eq!(VatId::parse(vat).is_ok(), validate_vat_number(vat), "{vat}");
    }
}

#[test]
fn parse_reports_the_rejecting_country() {
    match VatId::parse("CHE105933766") {
        Err(VatIdError::InvalidNumber { country, value }) => {
            assert_eq!(country, VatCountry::Switzerland);
            assert_eq!(value, "CHE105933766");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn canonical_form_uppercases_only_the_prefix() {
    let id = VatId::parse("ch E116.281.710 MWST").unwrap();
    assert_eq!(id.as_str(), "CHE116281710MWST");
    assert_eq!(id.country(), VatCountry::Switzerland);
    assert_eq!(id.body(), "E116281710MWST");
}

// ---------------------------------------------------------------------------
// serde round-trips
// ---------------------------------------------------------------------------

#[test]
fn vat_id_serializes_as_the_canonical_string() {
    let id = VatId::parse("de 136 695 976").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"DE136695976\"");

    let back: VatId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn vat_id_deserialization_rejects_invalid_numbers() {
    let result: Result<VatId, _> = serde_json::from_str("\"DE136695970\"");
    assert!(result.is_err());
}

#[test]
fn vat_country_round_trips_through_serde() {
    let json = serde_json::to_string(&VatCountry::CzechRepublic).unwrap();
    let back: VatCountry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, VatCountry::CzechRepublic);
}
