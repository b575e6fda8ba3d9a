use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnchorageError::unsupported("x")
            .to_string()
            .contains("unsupported combination:")
    );
    assert!(
        AnchorageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AnchorageError::engine("x")
            .to_string()
            .contains("engine error:")
    );
    assert!(
        AnchorageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnchorageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_unsupported());
}

#[test]
fn unsupported_is_detectable() {
    assert!(AnchorageError::unsupported("width + 5 * 2").is_unsupported());
    assert!(!AnchorageError::validation("x").is_unsupported());
}
