/// Number the site's WhatsApp buttons open when none is configured.
pub const DEFAULT_WHATSAPP_PHONE: &str = "5511999999999";

/// Page section a WhatsApp button sits in; picks the greeting sent with the link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSection {
    /// Hero section.
    Home,
    /// Services list.
    Services,
    /// Portfolio cases.
    Cases,
    /// Contact section.
    Contact,
    /// Floating button or an unknown section.
    #[default]
    Other,
}

/// Keep only the digits of a phone number, as `wa.me` expects.
pub fn format_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<digits>?text=<message>` with the message percent-encoded.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        format_phone(phone),
        urlencoding::encode(message)
    )
}

/// Greeting pre-filled for a button in `section`.
pub fn section_message(section: PageSection) -> &'static str {
    match section {
        PageSection::Home => "Olá! Gostaria de fazer um orçamento personalizado.",
        PageSection::Services => "Olá! Tenho interesse nos serviços da Evolua Web Design.",
        PageSection::Cases => {
            "Olá! Vi o portfólio e gostaria de saber mais sobre os projetos."
        }
        PageSection::Contact => "Olá! Gostaria de conversar sobre meu projeto.",
        PageSection::Other => "Olá! Gostaria de saber mais sobre os serviços da Evolua Web Design.",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/whatsapp.rs"]
mod tests;
