use assay_core::errors::*;

#[test]
fn missing_pattern_id_names_the_role() {
    let err = ValidationError::MissingPatternId { role: "candidate" };
    assert!(err.to_string().contains("candidate"));
}

#[test]
fn self_comparison_carries_id() {
    let err = ValidationError::SelfComparison {
        pattern_id: "PAT-007".into(),
    };
    assert!(err.to_string().contains("PAT-007"));
}

#[test]
fn library_parse_error_carries_path_and_reason() {
    let err = LibraryError::Parse {
        path: "patterns/bad.json".into(),
        reason: "expected value".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("patterns/bad.json"));
    assert!(msg.contains("expected value"));
}

// --- From impls ---

#[test]
fn validation_error_converts_to_assay_error() {
    let err: AssayError = ValidationError::MissingPatternId { role: "existing" }.into();
    assert!(matches!(err, AssayError::Validation(_)));
}

#[test]
fn library_error_converts_to_assay_error() {
    let err: AssayError = LibraryError::PatternNotFound {
        pattern_id: "PAT-404".into(),
    }
    .into();
    assert!(matches!(err, AssayError::Library(_)));
    assert!(err.to_string().contains("PAT-404"));
}

#[test]
fn serde_json_error_converts_to_assay_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: AssayError = json_err.into();
    assert!(matches!(err, AssayError::Serialization(_)));
}
