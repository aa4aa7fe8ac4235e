use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let c = SiteConfig::from_json_reader("{}".as_bytes()).unwrap();
    assert_eq!(c, SiteConfig::default());
    assert_eq!(c.whatsapp_phone, "5511999999999");
}

#[test]
fn nested_sections_override_defaults() {
    let json = r#"{
        "carousel": { "autoplay_interval_ms": 8000 },
        "labels": { "title": "Depoimentos" },
        "whatsapp_phone": "+55 21 98888-7777"
    }"#;
    let c = SiteConfig::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(c.carousel.autoplay_interval_ms, 8_000);
    assert!(c.carousel.autoplay_on_start);
    assert_eq!(c.labels.title, "Depoimentos");
    assert_eq!(c.whatsapp_phone, "+55 21 98888-7777");
}

#[test]
fn invalid_nested_values_are_config_errors() {
    let err = SiteConfig::from_json_reader(r#"{ "carousel": { "autoplay_interval_ms": 0 } }"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, VitrineError::Config(_)));

    let err = SiteConfig::from_json_reader(r#"{ "whatsapp_phone": "n/a" }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("whatsapp_phone"));
}
