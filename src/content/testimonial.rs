use std::collections::BTreeSet;
use std::io::Read;

use crate::foundation::error::{VitrineError, VitrineResult};

/// Highest star rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

const BUNDLED_RECORDS_JSON: &str = include_str!("../../data/testimonials.json");

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One client testimonial shown as a carousel slide.
///
/// Records are immutable once handed to a [`crate::Carousel`]; the carousel only reads them
/// through its view model and the markup adapter.
pub struct TestimonialRecord {
    /// Unique identifier within a record set.
    pub id: u32,
    /// Client display name.
    pub name: String,
    /// Client company.
    pub company: String,
    /// Client role at the company.
    pub role: String,
    /// Short avatar token (emoji or icon reference).
    #[serde(alias = "avatarGlyph", alias = "avatar")]
    pub avatar_glyph: String,
    /// Filled stars, `0..=5`.
    pub rating: u8,
    /// Quoted testimonial body.
    pub text: String,
    /// Achievement bullet points, in display order.
    #[serde(default)]
    pub results: Vec<String>,
}

impl TestimonialRecord {
    /// Filled flags for the five-star strip.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        stars(self.rating)
    }
}

/// Filled flags for a five-star strip; ratings above [`MAX_RATING`] fill every star.
pub fn stars(rating: u8) -> [bool; MAX_RATING as usize] {
    std::array::from_fn(|i| i < usize::from(rating))
}

/// Check a record set: ids are unique and ratings are within `0..=5`.
///
/// An empty set is valid here; whether an empty set can drive a carousel is decided at mount.
pub fn validate_records(records: &[TestimonialRecord]) -> VitrineResult<()> {
    let mut seen = BTreeSet::new();
    for r in records {
        if !seen.insert(r.id) {
            return Err(VitrineError::validation(format!(
                "duplicate testimonial id {}",
                r.id
            )));
        }
        if r.rating > MAX_RATING {
            return Err(VitrineError::validation(format!(
                "testimonial {} has rating {} (max {MAX_RATING})",
                r.id, r.rating
            )));
        }
    }
    Ok(())
}

/// Parse a JSON array of records and validate it.
pub fn load_records_json<R: Read>(reader: R) -> VitrineResult<Vec<TestimonialRecord>> {
    let records: Vec<TestimonialRecord> = serde_json::from_reader(reader)?;
    validate_records(&records)?;
    Ok(records)
}

/// The testimonials bundled with the site.
pub fn default_records() -> VitrineResult<Vec<TestimonialRecord>> {
    load_records_json(BUNDLED_RECORDS_JSON.as_bytes())
}

#[cfg(test)]
#[path = "../../tests/unit/content/testimonial.rs"]
mod tests;
