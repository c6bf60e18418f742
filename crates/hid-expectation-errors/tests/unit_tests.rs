//! Classification tests across the error taxonomy.

use logi_hid_expectation_errors::prelude::*;
use proptest::prelude::*;

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn inner() -> std::result::Result<(), ConfigError> {
        Err(ConfigError::UnsupportedProtocol(9))
    }
    fn outer() -> Result<()> {
        inner()?;
        Ok(())
    }

    let err = outer().expect_err("protocol 9 must be rejected");
    assert_eq!(err.category(), ErrorCategory::Config);
    assert_eq!(err.severity(), ErrorSeverity::Critical);
}

#[test]
fn test_profile_severity_follows_wrapped_config() {
    let err: ExpectationError =
        ProfileError::from(ConfigError::unknown_name("key", "KEYBOARD_Ä")).into();
    assert_eq!(err.category(), ErrorCategory::Profile);
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert!(err.is_recoverable());
}

#[test]
fn test_lookup_diagnostics_are_mild() {
    let unknown = LookupDiagnostic::UnknownKey {
        key: "G_1".into(),
        os: "all".into(),
    };
    let missing = LookupDiagnostic::MissingVariant {
        key: "EJECT".into(),
        os: "chromeOS".into(),
    };
    assert_eq!(unknown.severity(), ErrorSeverity::Warning);
    assert_eq!(missing.severity(), ErrorSeverity::Info);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every protocol error names the rejected mode.
    #[test]
    fn prop_protocol_message_names_mode(mode in 2u8..=u8::MAX) {
        let msg = ConfigError::UnsupportedProtocol(mode).to_string();
        prop_assert!(msg.ends_with(&mode.to_string()), "{msg}");
    }

    /// Schema errors are never critical, whatever the payload.
    #[test]
    fn prop_schema_errors_recoverable(class in "[A-Za-z]{1,16}", field in "[a-z_0-9]{1,24}") {
        let err: ExpectationError = SchemaError::unknown_field(class, field).into();
        prop_assert!(err.is_recoverable());
    }
}
