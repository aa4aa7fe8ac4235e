use super::*;
use crate::content::testimonial::default_records;

fn record(name: &str, rating: u8) -> TestimonialRecord {
    TestimonialRecord {
        id: 1,
        name: name.to_owned(),
        company: "Acme & Sons".to_owned(),
        role: "CEO".to_owned(),
        avatar_glyph: "🙂".to_owned(),
        rating,
        text: "Sales went <up>".to_owned(),
        results: vec!["+200%".to_owned()],
    }
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn record_text_is_escaped() {
    let frame = ViewModel::build(0, 1, true);
    let html = render_markup(&[record("<script>", 3)], &frame, &MarkupLabels::default());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Acme &amp; Sons"));
    assert!(html.contains("Sales went &lt;up&gt;"));
}

#[test]
fn stars_follow_rating() {
    let frame = ViewModel::build(0, 1, true);
    let html = render_markup(&[record("Ana", 3)], &frame, &MarkupLabels::default());
    assert_eq!(html.matches(r#"class="star filled""#).count(), 3);
    assert_eq!(html.matches(r#"class="star""#).count(), 2);
}

#[test]
fn markup_reflects_view_model() {
    let records = default_records().unwrap();
    let frame = ViewModel::build(2, records.len(), false);
    let html = render_markup(&records, &frame, &MarkupLabels::default());

    assert!(html.contains("translateX(-200%)"));
    assert_eq!(html.matches("carousel-indicator active").count(), 1);
    assert!(html.contains(r#"class="carousel-indicator active" data-index="2""#));
    assert_eq!(html.matches(r#"aria-hidden="false""#).count(), 1);
    assert_eq!(html.matches(r#"class="carousel-slide"#).count(), 5);
    assert!(html.contains("Ir para depoimento 5"));
    assert!(html.contains(r#"aria-label="Iniciar reprodução automática""#));
    assert!(html.contains(&records[2].name));
}

#[test]
fn view_tracks_renders_and_clears_on_release() {
    let mut view = HtmlView::new(vec![record("Ana", 5)], MarkupLabels::default());
    assert!(view.markup().is_empty());
    view.render(&ViewModel::build(0, 1, true));
    assert_eq!(view.render_count(), 1);
    assert!(view.markup().contains("Pausar reprodução automática"));
    view.release();
    assert!(view.markup().is_empty());
}

#[test]
fn labels_deserialize_partially() {
    let labels: MarkupLabels = serde_json::from_str(r#"{ "title": "Nossos clientes" }"#).unwrap();
    assert_eq!(labels.title, "Nossos clientes");
    assert_eq!(labels.prev, MarkupLabels::default().prev);
}
