use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VitrineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VitrineError::config("x").to_string().contains("config error:"));
    assert!(
        VitrineError::Serde("x".to_owned())
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let parse = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = VitrineError::from(parse);
    assert!(matches!(err, VitrineError::Serde(_)));
}
