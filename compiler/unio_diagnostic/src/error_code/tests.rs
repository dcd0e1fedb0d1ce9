use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E3002.to_string(), "E3002");
    assert_eq!(ErrorCode::W3005.as_str(), "W3005");
}

#[test]
fn test_classification() {
    assert!(ErrorCode::E3004.is_pattern_error());
    assert!(!ErrorCode::E3004.is_warning());
    assert!(ErrorCode::W3005.is_warning());
    assert!(ErrorCode::E9002.is_internal_error());
    assert!(!ErrorCode::E9002.is_pattern_error());
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e3001".parse::<ErrorCode>(), Ok(ErrorCode::E3001));
    assert!("E0000".parse::<ErrorCode>().is_err());
}
