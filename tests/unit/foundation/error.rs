use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GirasolError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GirasolError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        GirasolError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GirasolError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: GirasolError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GirasolError::Serde(_)));
}
