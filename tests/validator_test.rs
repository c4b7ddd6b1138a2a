use uk_postcode::{
    Postcode, PostcodeError, PostcodeValidator, RuleSet, SpecialPostcodes, ValidatedPostcode,
};

const VALID_POSTCODES: [&str; 10] = [
    "EC1A 1BB", "W1A 0AX", "M1 1AE", "B33 8TH", "CR2 6XH", "DN55 1PT", "SW1W 0NY", "PO16 7GZ",
    "GU16 7HF", "L1 8JQ",
];

#[test]
fn test_valid_postcodes_uppercase_and_lowercase() {
    for raw in VALID_POSTCODES {
        assert!(Postcode::new(raw).validate().is_ok(), "{raw} should be valid");
        assert!(
            Postcode::new(raw.to_lowercase()).validate().is_ok(),
            "{} should be valid",
            raw.to_lowercase()
        );
    }
}

#[test]
fn test_any_amount_of_spaces() {
    for raw in ["EC1A1BB", "EC1A 1BB", "EC1A  1BB", "W31BB", "W3   1BB"] {
        let mut postcode = Postcode::new(raw);
        assert!(postcode.validate().is_ok(), "{raw} should be valid");
    }

    let mut postcode = Postcode::new("EC1A  1BB");
    postcode.validate().unwrap();
    assert_eq!(postcode.outward().unwrap(), "EC1A");
    assert_eq!(postcode.inward().unwrap(), "1BB");
}

#[test]
fn test_invalid_shapes_raise_invalid_postcode() {
    let absent: Option<&str> = None;
    let candidates = vec![
        Postcode::new("EC1A A4BB"),
        Postcode::new("1W1A 0AX"),
        Postcode::new("M001 1AE"),
        Postcode::new("B338-TH5"),
        Postcode::new("CR2 6XH#"),
        Postcode::new(""),
        Postcode::new("0000000"),
        Postcode::from(absent),
    ];

    for mut postcode in candidates {
        let err = postcode.validate().unwrap_err();
        assert!(err.is_invalid_postcode(), "'{}' should be invalid", postcode);
        assert!(!postcode.is_validated());
        assert!(matches!(postcode.outward(), Err(PostcodeError::NotValidated)));
        assert!(matches!(postcode.area(), Err(PostcodeError::NotValidated)));
    }
}

#[test]
fn test_accessors_require_validation() {
    let postcode = Postcode::new("EC1A 1BB");
    assert!(matches!(postcode.outward(), Err(PostcodeError::NotValidated)));
    assert!(matches!(postcode.inward(), Err(PostcodeError::NotValidated)));
    assert!(matches!(postcode.area(), Err(PostcodeError::NotValidated)));
    assert!(matches!(postcode.district(), Err(PostcodeError::NotValidated)));
    assert!(matches!(postcode.sector(), Err(PostcodeError::NotValidated)));
    assert!(matches!(postcode.unit(), Err(PostcodeError::NotValidated)));
    assert!(postcode.validated().unwrap_err().is_usage_error());
}

#[test]
fn test_segments_of_known_postcodes() {
    // (raw, outward, inward, area, district, sector, unit)
    let cases = [
        ("EC1A 1BB", "EC1A", "1BB", "EC", "1A", "1", "BB"),
        ("W1A 0AX", "W1A", "0AX", "W", "1A", "0", "AX"),
        ("M1 1AE", "M1", "1AE", "M", "1", "1", "AE"),
        ("EC1A1BB", "EC1A", "1BB", "EC", "1A", "1", "BB"),
        ("W1A0AX", "W1A", "0AX", "W", "1A", "0", "AX"),
        ("M11AE", "M1", "1AE", "M", "1", "1", "AE"),
    ];

    for (raw, outward, inward, area, district, sector, unit) in cases {
        let mut postcode = Postcode::new(raw);
        postcode.validate().unwrap();
        assert_eq!(postcode.outward().unwrap(), outward, "{raw}");
        assert_eq!(postcode.inward().unwrap(), inward, "{raw}");
        assert_eq!(postcode.area().unwrap(), area, "{raw}");
        assert_eq!(postcode.district().unwrap(), district, "{raw}");
        assert_eq!(postcode.sector().unwrap(), sector, "{raw}");
        assert_eq!(postcode.unit().unwrap(), unit, "{raw}");
    }
}

#[test]
fn test_case_insensitive_outcome() {
    let lower = PostcodeValidator::standard().validate("ec1a 1bb").unwrap();
    let upper = PostcodeValidator::standard().validate("EC1A 1BB").unwrap();
    assert_eq!(lower.segments(), upper.segments());
    assert_eq!(lower.district(), upper.district());
    assert_eq!(lower.to_string(), "ec1a 1bb");
}

#[test]
fn test_revalidation_is_idempotent() {
    let mut valid = Postcode::new("SW1W 0NY");
    let first = valid.validate().unwrap().clone();
    let second = valid.validate().unwrap().clone();
    assert_eq!(first, second);

    let mut invalid = Postcode::new("QA1 1AA");
    assert!(invalid.validate().is_err());
    assert!(invalid.validate().is_err());
    assert!(!invalid.is_validated());
}

#[test]
fn test_rule_violations_are_invalid_postcodes() {
    let rejected = [
        "QA1 1AA", "AZ1 1AA", "W1I 1AA", "EC1C 1AA", "M1 1CA", "SO1 1AA", "CM10 1AA", "EC5A 1AA",
    ];
    for raw in rejected {
        let err = PostcodeValidator::standard().validate(raw).unwrap_err();
        assert!(err.is_invalid_postcode(), "{raw} should be rejected");
    }
    assert!(PostcodeValidator::standard().is_valid("BS10 1AA"));
    assert!(PostcodeValidator::standard().is_valid("SO11 1AA"));
}

#[test]
fn test_display_returns_raw_input() {
    let mut postcode = Postcode::new(" ec1a1bb ");
    assert_eq!(postcode.to_string(), " ec1a1bb ");
    postcode.validate().unwrap();
    assert_eq!(postcode.to_string(), " ec1a1bb ");

    let mut invalid = Postcode::new("nonsense");
    let _ = invalid.validate();
    assert_eq!(invalid.to_string(), "nonsense");
}

#[test]
fn test_injected_rule_set_replaces_standard_rules() {
    let permissive = PostcodeValidator::new(RuleSet::empty());
    let mut postcode = Postcode::new("QA1 1AA");
    assert!(postcode.validate_with(&permissive).is_ok());
    assert_eq!(postcode.area().unwrap(), "QA");

    // A later failing validation leaves the postcode unvalidated.
    assert!(postcode.validate().is_err());
    assert!(matches!(postcode.area(), Err(PostcodeError::NotValidated)));
}

#[test]
fn test_from_str_and_serde() -> anyhow::Result<()> {
    let validated: ValidatedPostcode = "w1a0ax".parse()?;
    assert_eq!(validated.formatted(), "W1A 0AX");

    let json = serde_json::to_value(&validated)?;
    assert_eq!(
        json,
        serde_json::json!({"raw": "w1a0ax", "outward": "W1A", "inward": "0AX", "special": false})
    );

    let round_trip: ValidatedPostcode = serde_json::from_value(json)?;
    assert_eq!(round_trip, validated);
    assert_eq!(round_trip.to_string(), "w1a0ax");

    assert!("QA1 1AA".parse::<ValidatedPostcode>().is_err());
    Ok(())
}

#[test]
fn test_special_postcode_survives_serde() -> anyhow::Result<()> {
    let validator =
        PostcodeValidator::default().with_special_postcodes(SpecialPostcodes::standard());
    let validated = validator.validate("GIR 0AA")?;

    let json = serde_json::to_string(&validated)?;
    let round_trip: ValidatedPostcode = serde_json::from_str(&json)?;
    assert_eq!(round_trip, validated);
    assert!(round_trip.is_special());
    assert_eq!(round_trip.outward(), "GIR");
    Ok(())
}

#[test]
fn test_permissive_validator_output_survives_serde() -> anyhow::Result<()> {
    let permissive = PostcodeValidator::new(RuleSet::empty());
    let validated = permissive.validate("qa1 1aa")?;

    let json = serde_json::to_string(&validated)?;
    let round_trip: ValidatedPostcode = serde_json::from_str(&json)?;
    assert_eq!(round_trip, validated);
    assert_eq!(round_trip.raw(), "qa1 1aa");
    assert_eq!(round_trip.area(), "QA");
    Ok(())
}

#[test]
fn test_validators_shared_across_threads() {
    let handles: Vec<_> = VALID_POSTCODES
        .into_iter()
        .map(|raw| std::thread::spawn(move || PostcodeValidator::standard().is_valid(raw)))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
