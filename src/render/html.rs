use std::fmt::Write as _;

use crate::{
    carousel::view::{CarouselView, ViewModel},
    content::testimonial::TestimonialRecord,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Visible and accessible copy used by the carousel markup.
pub struct MarkupLabels {
    /// Section heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Heading above each testimonial's results list.
    pub results_heading: String,
    /// Accessible label of the "previous" arrows.
    pub prev: String,
    /// Accessible label of the "next" arrows.
    pub next: String,
    /// Accessible label of an indicator; `{n}` is replaced by the 1-based slide number.
    pub go_to: String,
    /// Accessible label of the play/pause control while autoplay is on.
    pub pause: String,
    /// Accessible label of the play/pause control while autoplay is off.
    pub play: String,
}

impl Default for MarkupLabels {
    fn default() -> Self {
        Self {
            title: "O que nossos clientes dizem".to_owned(),
            subtitle: "Depoimentos reais de empresas que transformaram seus negócios conosco".to_owned(),
            results_heading: "Resultados Alcançados:".to_owned(),
            prev: "Depoimento anterior".to_owned(),
            next: "Próximo depoimento".to_owned(),
            go_to: "Ir para depoimento {n}".to_owned(),
            pause: "Pausar reprodução automática".to_owned(),
            play: "Iniciar reprodução automática".to_owned(),
        }
    }
}

const ICON_PREV: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M15 18L9 12L15 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const ICON_NEXT: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M9 18L15 12L9 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const ICON_PAUSE: &str = r#"<svg class="play-icon" width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true"><rect x="6" y="4" width="4" height="16" fill="currentColor"/><rect x="14" y="4" width="4" height="16" fill="currentColor"/></svg>"#;
const ICON_PLAY: &str = r#"<svg class="play-icon" width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true"><polygon points="5,3 19,12 5,21" fill="currentColor"/></svg>"#;

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Produce the full carousel markup for `frame`.
///
/// `records` must be the carousel's records in slide order; slides beyond the view model's
/// length are not emitted.
pub fn render_markup(
    records: &[TestimonialRecord],
    frame: &ViewModel,
    labels: &MarkupLabels,
) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(r#"<div class="testimonials-carousel">"#);
    let _ = write!(
        out,
        r#"<div class="carousel-header"><h3 class="carousel-title">{}</h3><p class="carousel-subtitle">{}</p></div>"#,
        escape_html(&labels.title),
        escape_html(&labels.subtitle),
    );

    out.push_str(r#"<div class="carousel-container">"#);
    let _ = write!(
        out,
        r#"<div class="carousel-track" style="transform: translateX({}%)">"#,
        frame.track_offset_percent
    );
    for (record, slide) in records.iter().zip(&frame.slides) {
        let class = if slide.active {
            "carousel-slide active"
        } else {
            "carousel-slide"
        };
        let _ = write!(
            out,
            r#"<div class="{class}" aria-hidden="{}">"#,
            slide.aria_hidden
        );
        write_card(&mut out, record, labels);
        out.push_str("</div>");
    }
    out.push_str("</div>");

    for (side, label, icon) in [
        ("prev", &labels.prev, ICON_PREV),
        ("next", &labels.next, ICON_NEXT),
    ] {
        let _ = write!(
            out,
            r#"<button class="carousel-btn carousel-btn-{side}" data-action="{side}" aria-label="{}">{icon}</button>"#,
            escape_html(label)
        );
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="carousel-indicators">"#);
    for indicator in &frame.indicators {
        let class = if indicator.active {
            "carousel-indicator active"
        } else {
            "carousel-indicator"
        };
        let label = labels.go_to.replace("{n}", &(indicator.index + 1).to_string());
        let _ = write!(
            out,
            r#"<button class="{class}" data-index="{}" aria-label="{}" aria-current="{}"></button>"#,
            indicator.index,
            escape_html(&label),
            indicator.active
        );
    }
    out.push_str("</div>");

    let (toggle_label, toggle_icon) = if frame.autoplay_playing {
        (&labels.pause, ICON_PAUSE)
    } else {
        (&labels.play, ICON_PLAY)
    };
    let _ = write!(
        out,
        r#"<div class="carousel-controls"><button class="auto-play-toggle" data-action="toggle" aria-label="{}">{toggle_icon}</button></div>"#,
        escape_html(toggle_label)
    );

    out.push_str("</div>");
    out
}

fn write_card(out: &mut String, record: &TestimonialRecord, labels: &MarkupLabels) {
    out.push_str(r#"<div class="testimonial-card"><div class="testimonial-header">"#);
    let _ = write!(
        out,
        r#"<div class="client-info"><div class="client-avatar">{}</div><div class="client-details"><h4 class="client-name">{}</h4><p class="client-role">{}</p><p class="client-company">{}</p></div></div>"#,
        escape_html(&record.avatar_glyph),
        escape_html(&record.name),
        escape_html(&record.role),
        escape_html(&record.company),
    );

    let _ = write!(
        out,
        r#"<div class="rating" aria-label="{} / 5">"#,
        record.rating
    );
    for filled in record.stars() {
        out.push_str(if filled {
            r#"<span class="star filled">★</span>"#
        } else {
            r#"<span class="star">☆</span>"#
        });
    }
    out.push_str("</div></div>");

    let _ = write!(
        out,
        r#"<blockquote class="testimonial-text">"{}"</blockquote>"#,
        escape_html(&record.text)
    );

    if !record.results.is_empty() {
        let _ = write!(
            out,
            r#"<div class="testimonial-results"><h5>{}</h5><ul class="results-list">"#,
            escape_html(&labels.results_heading)
        );
        for result in &record.results {
            let _ = write!(out, "<li>{}</li>", escape_html(result));
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</div>");
}

/// A [`CarouselView`] that re-renders the carousel markup on every frame.
///
/// Hosts that patch a real document can diff or swap [`HtmlView::markup`]; releasing the view
/// clears it, the way destroying the carousel empties its container.
#[derive(Clone, Debug)]
pub struct HtmlView {
    records: Vec<TestimonialRecord>,
    labels: MarkupLabels,
    markup: String,
    renders: usize,
}

impl HtmlView {
    /// A view for `records` (same list, same order as given to the carousel).
    pub fn new(records: Vec<TestimonialRecord>, labels: MarkupLabels) -> Self {
        Self {
            records,
            labels,
            markup: String::new(),
            renders: 0,
        }
    }

    /// Latest markup; empty before the first render and after release.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl CarouselView for HtmlView {
    fn render(&mut self, frame: &ViewModel) {
        self.markup = render_markup(&self.records, frame, &self.labels);
        self.renders += 1;
    }

    fn release(&mut self) {
        self.markup.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
