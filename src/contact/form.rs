use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of a contact name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[()\s\-+0-9]{10,}$").expect("phone regex should compile"));

/// Which rules apply to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Contact name.
    Name,
    /// E-mail address.
    Email,
    /// Phone number.
    Phone,
    /// Free-text message.
    Message,
    /// Anything else; only the required rule applies.
    Other,
}

/// One form input as submitted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormField {
    /// Field name as it appears in the form.
    pub name: String,
    /// Validation rules to apply.
    pub kind: FieldKind,
    /// Raw value; surrounding whitespace is ignored.
    pub value: String,
    /// Whether an empty value is an error.
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    /// A field of `kind` named after it (`"email"`, `"phone"`, ...).
    pub fn new(kind: FieldKind, value: impl Into<String>, required: bool) -> Self {
        let name = match kind {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Message => "message",
            FieldKind::Other => "other",
        };
        Self {
            name: name.to_owned(),
            kind,
            value: value.into(),
            required,
        }
    }
}

/// Why a field was rejected.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Required but empty.
    #[error("Este campo é obrigatório")]
    Required,
    /// Not shaped like an e-mail address.
    #[error("Digite um e-mail válido")]
    InvalidEmail,
    /// Fewer than ten digits/phone punctuation characters, or other characters present.
    #[error("Digite um telefone válido")]
    InvalidPhone,
    /// Name shorter than [`MIN_NAME_CHARS`].
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,
}

/// Check one field. Empty optional fields always pass.
pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    let value = field.value.trim();
    if value.is_empty() {
        return if field.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    match field.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Phone if !PHONE_RE.is_match(value) => Err(FieldError::InvalidPhone),
        FieldKind::Name if value.chars().count() < MIN_NAME_CHARS => {
            Err(FieldError::NameTooShort)
        }
        _ => Ok(()),
    }
}

/// Outcome of validating a whole form.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FormReport {
    /// Rejected fields, in form order.
    pub errors: Vec<(String, FieldError)>,
}

impl FormReport {
    /// No field was rejected.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for the field called `name`, if any.
    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, err)| err)
    }
}

/// Validate every field and collect all failures, not just the first.
///
/// Empty optional fields pass; optional fields with a value must still be well-formed.
pub fn validate_form(fields: &[FormField]) -> FormReport {
    let errors = fields
        .iter()
        .filter_map(|f| validate_field(f).err().map(|e| (f.name.clone(), e)))
        .collect();
    FormReport { errors }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
