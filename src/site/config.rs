use std::io::Read;

use crate::{
    carousel::config::CarouselConfig,
    contact::whatsapp::DEFAULT_WHATSAPP_PHONE,
    foundation::error::{VitrineError, VitrineResult},
    render::html::MarkupLabels,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Site-level settings: carousel tunables, carousel copy and the WhatsApp number.
///
/// Every field has a default, so an empty JSON object is a valid config.
pub struct SiteConfig {
    /// Carousel behaviour.
    pub carousel: CarouselConfig,
    /// Carousel copy.
    pub labels: MarkupLabels,
    /// Number WhatsApp buttons open.
    pub whatsapp_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            labels: MarkupLabels::default(),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_reader<R: Read>(reader: R) -> VitrineResult<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate nested settings.
    pub fn validate(&self) -> VitrineResult<()> {
        self.carousel.validate()?;
        if !self.whatsapp_phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(VitrineError::config(
                "whatsapp_phone must contain at least one digit",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
