use super::*;

fn record(id: u32, rating: u8) -> TestimonialRecord {
    TestimonialRecord {
        id,
        name: format!("client {id}"),
        company: "Acme".to_owned(),
        role: "CEO".to_owned(),
        avatar_glyph: "*".to_owned(),
        rating,
        text: "great".to_owned(),
        results: vec!["more leads".to_owned()],
    }
}

#[test]
fn bundled_records_load() {
    let records = default_records().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[4].id, 5);
    assert!(records.iter().all(|r| r.rating == 5 && r.results.len() == 3));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = validate_records(&[record(1, 5), record(1, 4)]).unwrap_err();
    assert!(err.to_string().contains("duplicate testimonial id 1"));
}

#[test]
fn rating_above_five_is_rejected() {
    assert!(validate_records(&[record(1, 6)]).is_err());
    assert!(validate_records(&[record(1, 0), record(2, 5)]).is_ok());
}

#[test]
fn star_strip_matches_rating() {
    assert_eq!(stars(0), [false; 5]);
    assert_eq!(stars(3), [true, true, true, false, false]);
    assert_eq!(stars(9), [true; 5]);
    assert_eq!(record(1, 4).stars(), [true, true, true, true, false]);
}

#[test]
fn camel_case_avatar_field_is_accepted() {
    let json = r#"[{"id":7,"name":"A","company":"B","role":"C","avatarGlyph":"x","rating":2,"text":"t"}]"#;
    let records = load_records_json(json.as_bytes()).unwrap();
    assert_eq!(records[0].avatar_glyph, "x");
    assert!(records[0].results.is_empty());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = load_records_json("{".as_bytes()).unwrap_err();
    assert!(matches!(err, VitrineError::Serde(_)));
}
