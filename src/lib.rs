//! Vitrine is the behaviour layer of a marketing portfolio site, written as plain Rust state
//! machines so it can be tested without a browser.
//!
//! The centrepiece is the testimonials [`Carousel`]: a small controller with wrap-around
//! navigation, a recurring autoplay timer, hover/touch suspension and keyboard/swipe input.
//! It never touches a document directly. Each state change produces a [`ViewModel`] for a
//! [`CarouselView`] to draw, and timers go through a [`Scheduler`] the host provides.
//!
//! # Pieces
//!
//! - **Content**: [`TestimonialRecord`] plus the bundled site testimonials ([`default_records`]).
//! - **Timing**: [`Scheduler`] and the virtual-clock [`ManualScheduler`].
//! - **Carousel**: [`Carousel`], [`CarouselConfig`], [`Command`], [`ViewModel`].
//! - **Input**: [`InputRouter`] maps clicks, keys, hover and touch onto commands;
//!   [`classify_gesture`] is the pure swipe rule.
//! - **Markup**: [`HtmlView`] / [`render_markup`] produce the carousel HTML.
//! - **Contact**: form validation ([`validate_form`]) and WhatsApp deep links ([`whatsapp_url`]).
//! - **Replay**: [`replay`] runs a scripted [`Scenario`] and returns a trace.
//!
//! # Guarantees
//!
//! - The visible index is always in range; navigation wraps.
//! - At most one autoplay timer is live per carousel, and stale firings are dropped.
//! - A carousel that cannot mount is inert rather than failing; after `destroy` nothing
//!   renders or schedules again.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod carousel;
mod contact;
mod content;
mod foundation;
mod input;
mod render;
mod replay;
mod site;
mod timing;

pub use carousel::config::{AutoplayPhase, CarouselConfig};
pub use carousel::controller::{Carousel, CarouselStatus, Command};
pub use carousel::view::{CarouselView, IndicatorView, RecordingView, SlideView, ViewModel};
pub use contact::form::{
    FieldError, FieldKind, FormField, FormReport, MIN_NAME_CHARS, validate_field, validate_form,
};
pub use contact::whatsapp::{
    DEFAULT_WHATSAPP_PHONE, PageSection, format_phone, section_message, whatsapp_url,
};
pub use content::testimonial::{
    MAX_RATING, TestimonialRecord, default_records, load_records_json, stars, validate_records,
};
pub use foundation::core::Millis;
pub use foundation::error::{VitrineError, VitrineResult};
pub use input::gesture::{Gesture, ScrollIntent, SwipeTracker, classify_gesture};
pub use input::router::{InputEvent, InputRouter, Routed};
pub use render::html::{HtmlView, MarkupLabels, escape_html, render_markup};
pub use replay::scenario::{
    MAX_REPLAY_FIRINGS, MAX_SCENARIO_MS, Scenario, ScenarioStep, TraceCause, TraceEntry, replay,
};
pub use site::config::SiteConfig;
pub use timing::scheduler::{ManualScheduler, Scheduler, TimerId};
