use super::*;

#[test]
fn arithmetic_saturates() {
    assert_eq!(Millis(5) - Millis(9), Millis::ZERO);
    assert_eq!(Millis(u64::MAX) + Millis(1), Millis(u64::MAX));
    assert_eq!(Millis(10_000).since(Millis(5_000)), Millis(5_000));
    assert_eq!(Millis(1).checked_add(Millis(2)), Some(Millis(3)));
    assert_eq!(Millis(u64::MAX).checked_add(Millis(1)), None);
}

#[test]
fn serializes_as_plain_number() {
    assert_eq!(serde_json::to_string(&Millis(5000)).unwrap(), "5000");
    let m: Millis = serde_json::from_str("250").unwrap();
    assert_eq!(m, Millis(250));
    assert_eq!(m.to_string(), "250ms");
}
