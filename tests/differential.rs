use pretty_assertions::assert_eq;
use swar_stoi::{
    parse_checked, parse_fast,
    validate::{sweep_u32, SweepConfig},
    ParseError, Strategy,
};

#[test]
fn nine_digit_end_to_end() {
    let input = b"123456789";
    assert_eq!(parse_fast(input), 123_456_789);
    assert_eq!(parse_checked::<u32>(input), Ok(123_456_789));
}

#[test]
fn chunk_boundary_lengths() {
    let cases: [(&str, u32); 5] = [
        ("9876543", 9_876_543),
        ("98765432", 98_765_432),
        ("987654321", 987_654_321),
        ("0000000098765432", 98_765_432),
        ("0000004294967295", u32::MAX),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_fast(input.as_bytes()), expected, "input was {input}");
        assert_eq!(
            parse_checked::<u32>(input.as_bytes()),
            Ok(expected),
            "input was {input}"
        );
    }
}

#[test]
fn u32_and_u64_overflow_boundaries() {
    assert_eq!(parse_checked::<u32>(b"4294967295"), Ok(4_294_967_295));
    assert_eq!(parse_checked::<u32>(b"4294967296"), Err(ParseError::Overflow));
    assert_eq!(
        parse_checked::<u64>(b"18446744073709551615"),
        Ok(18_446_744_073_709_551_615)
    );
    assert_eq!(
        parse_checked::<u64>(b"18446744073709551616"),
        Err(ParseError::Overflow)
    );
}

#[test]
fn sign_is_not_supported() {
    assert_eq!(parse_checked::<u32>(b"-5000"), Err(ParseError::InvalidCharacter));
    assert_eq!(parse_checked::<u32>(b"+5000"), Err(ParseError::InvalidCharacter));
    assert_eq!(parse_checked::<u32>(b"-"), Err(ParseError::InvalidCharacter));
}

// Empty input is Ok(0) rather than an error. Deliberately preserved; if this
// ever changes it should be a conscious decision.
#[test]
fn empty_input_convention() {
    assert_eq!(parse_checked::<u32>(b""), Ok(0));
    assert_eq!(parse_fast(b""), 0);
}

#[test]
fn strided_sweep_is_clean() {
    let config = SweepConfig {
        stride: 9_973,
        sample_limit: 4,
    };
    for strategy in Strategy::ALL {
        let report = sweep_u32(strategy, &config);
        assert!(report.is_clean(), "{strategy}: {:?}", report.samples);
    }
}

#[test]
#[ignore = "walks all 2^32 values; run with --ignored --release"]
fn exhaustive_u32_sweep() {
    for strategy in [Strategy::Predictable, Strategy::Swar] {
        let report = sweep_u32(strategy, &SweepConfig::default());
        assert_eq!(report.checked, u64::from(u32::MAX) + 1);
        assert!(report.is_clean(), "{strategy}: {:?}", report.samples);
    }
}
