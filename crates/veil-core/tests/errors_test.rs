use veil_core::errors::{
    AnonymizationError, ConfigError, RecognizerError, ResolutionError, VeilError, VeilErrorCode,
};

#[test]
fn subsystem_errors_convert_into_veil_error() {
    let err: VeilError = RecognizerError::Failed {
        recognizer: "pattern:email".to_string(),
        reason: "boom".to_string(),
    }
    .into();
    assert!(matches!(err, VeilError::Recognizer(_)));

    let err: VeilError = ResolutionError::Inconsistent {
        details: "x".to_string(),
    }
    .into();
    assert!(matches!(err, VeilError::Resolution(_)));

    let err: VeilError = AnonymizationError::InvalidSpan {
        start: 4,
        end: 2,
        reason: "inverted".to_string(),
    }
    .into();
    assert!(matches!(err, VeilError::Anonymization(_)));

    let err: VeilError = ConfigError::FileNotFound {
        path: "veil.toml".to_string(),
    }
    .into();
    assert!(matches!(err, VeilError::Config(_)));
}

#[test]
fn messages_carry_context() {
    let err = RecognizerError::SpanOutOfBounds {
        recognizer: "custom".to_string(),
        start: 3,
        end: 40,
        len: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("custom"));
    assert!(msg.contains("[3, 40)"));
    assert!(msg.contains("10"));

    let err: VeilError = AnonymizationError::OperatorFailed {
        operator: "hash".to_string(),
        entity_type: "EMAIL".to_string(),
        reason: "no salt".to_string(),
    }
    .into();
    let msg = err.to_string();
    assert!(msg.starts_with("anonymization failure:"));
    assert!(msg.contains("hash"));
    assert!(msg.contains("EMAIL"));
}

#[test]
fn error_codes_follow_the_subsystem() {
    let cases: Vec<(VeilError, &str)> = vec![
        (
            RecognizerError::PatternUnavailable {
                recognizer: "pattern:ssn".to_string(),
                pattern: "ssn".to_string(),
            }
            .into(),
            "RECOGNIZER_ERROR",
        ),
        (
            ResolutionError::Inconsistent {
                details: "x".to_string(),
            }
            .into(),
            "RESOLUTION_ERROR",
        ),
        (
            AnonymizationError::InvalidSpan {
                start: 0,
                end: 0,
                reason: "empty".to_string(),
            }
            .into(),
            "ANONYMIZATION_ERROR",
        ),
        (
            ConfigError::ValidationFailed {
                field: "detection.score_threshold".to_string(),
                message: "bad".to_string(),
            }
            .into(),
            "CONFIG_ERROR",
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }
}
