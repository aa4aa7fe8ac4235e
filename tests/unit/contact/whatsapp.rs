use super::*;

#[test]
fn phone_keeps_digits_only() {
    assert_eq!(format_phone("+55 (11) 99999-9999"), "5511999999999");
    assert_eq!(format_phone("abc"), "");
}

#[test]
fn url_encodes_message() {
    assert_eq!(
        whatsapp_url("+55 11 99999-9999", "Olá! Tudo bem?"),
        "https://wa.me/5511999999999?text=Ol%C3%A1%21%20Tudo%20bem%3F"
    );
    assert_eq!(
        whatsapp_url(DEFAULT_WHATSAPP_PHONE, ""),
        "https://wa.me/5511999999999?text="
    );
}

#[test]
fn every_section_has_a_greeting() {
    for section in [
        PageSection::Home,
        PageSection::Services,
        PageSection::Cases,
        PageSection::Contact,
        PageSection::Other,
    ] {
        assert!(section_message(section).starts_with("Olá!"));
    }
    assert_eq!(PageSection::default(), PageSection::Other);
}
