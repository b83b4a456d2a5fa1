//! Input validation for wizard submissions.
//!
//! Validation is fail-fast: the first violated rule is reported and nothing
//! else is checked. Successful validation yields a `WizardAnswers` whose
//! closed-choice fields are already typed, so scoring never sees a label it
//! does not know.

use crate::models::{
    AnalysisCommitment, Blocker, Intent, Profile, PropertyType, PurchaseRange, WizardAnswers,
};
use phonenumber::country::Id as CountryId;
use phonenumber::Mode;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Fields that must be present and non-empty, in check order.
const REQUIRED_FIELDS: [&str; 9] = [
    "profile",
    "zone",
    "propertyType",
    "purchaseRange",
    "intent",
    "analysisCommitment",
    "name",
    "email",
    "phone",
];

/// First rule a submission broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object.
    InvalidBody,
    /// Required field absent, null, structured or blank.
    MissingField(&'static str),
    InvalidEmail,
    InvalidSatisfaction,
    ConsentRequired,
    /// Closed-choice field with a label the wizard never offers.
    UnknownOption { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending field, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidBody => None,
            ValidationError::MissingField(field) => Some(*field),
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::InvalidSatisfaction => Some("satisfaction"),
            ValidationError::ConsentRequired => Some("consent"),
            ValidationError::UnknownOption { field, .. } => Some(*field),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBody => write!(f, "Invalid request body."),
            ValidationError::MissingField(field) => {
                write!(f, "El campo \"{}\" es obligatorio.", field)
            }
            ValidationError::InvalidEmail => write!(f, "El email no tiene un formato válido."),
            ValidationError::InvalidSatisfaction => {
                write!(f, "La satisfacción debe ser un número entre 1 y 5.")
            }
            ValidationError::ConsentRequired => write!(
                f,
                "Es necesario aceptar el consentimiento para continuar."
            ),
            ValidationError::UnknownOption { field, value } => write!(
                f,
                "El valor \"{}\" no es una opción válida para \"{}\".",
                value, field
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates and normalizes a raw submission body.
pub fn validate_submit_body(body: &Value) -> Result<WizardAnswers, ValidationError> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationError::InvalidBody);
    };

    for field in REQUIRED_FIELDS {
        if required_text(fields, field).is_none() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let email = required_text(fields, "email").ok_or(ValidationError::MissingField("email"))?;
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    let satisfaction =
        parse_satisfaction(fields.get("satisfaction")).ok_or(ValidationError::InvalidSatisfaction)?;

    if !is_truthy(fields.get("consent")) {
        return Err(ValidationError::ConsentRequired);
    }

    let profile = required_option(fields, "profile", Profile::from_label)?;
    let property_type = required_option(fields, "propertyType", PropertyType::from_label)?;
    let purchase_range = required_option(fields, "purchaseRange", PurchaseRange::from_label)?;
    let intent = required_option(fields, "intent", Intent::from_label)?;
    let analysis_commitment =
        required_option(fields, "analysisCommitment", AnalysisCommitment::from_label)?;
    let freno = match required_text(fields, "freno") {
        Some(raw) => Some(Blocker::from_label(&raw).ok_or(ValidationError::UnknownOption {
            field: "freno",
            value: raw,
        })?),
        None => None,
    };

    Ok(WizardAnswers {
        profile,
        freno,
        zone: text_or_missing(fields, "zone")?,
        property_type,
        purchase_range,
        satisfaction,
        intent,
        analysis_commitment,
        name: text_or_missing(fields, "name")?,
        email: email.to_lowercase(),
        phone: text_or_missing(fields, "phone")?,
        consent: true,
    })
}

/// Basic syntactic email check: `local@domain.tld` without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalizes a Spanish phone number to E.164 (+34...).
///
/// Returns `None` when the number does not parse or is not a valid Spanish
/// number; phone format is never a reason to reject a lead.
pub fn normalize_es_phone(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.len() < 9 {
        return None;
    }

    match phonenumber::parse(Some(CountryId::ES), raw) {
        Ok(number) if phonenumber::is_valid(&number) => {
            let formatted = number.format().mode(Mode::E164).to_string();
            tracing::debug!("Normalized phone {} -> {}", raw, formatted);
            Some(formatted)
        }
        Ok(_) => {
            tracing::debug!("Phone is not a valid Spanish number: {}", raw);
            None
        }
        Err(e) => {
            tracing::debug!("Failed to parse phone '{}': {:?}", raw, e);
            None
        }
    }
}

/// Stringified, trimmed scalar value; `None` when absent, null, structured
/// or blank.
fn required_text(fields: &Map<String, Value>, field: &str) -> Option<String> {
    let text = match fields.get(field)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    (!text.is_empty()).then_some(text)
}

fn text_or_missing(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    required_text(fields, field).ok_or(ValidationError::MissingField(field))
}

fn required_option<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let raw = text_or_missing(fields, field)?;
    parse(&raw).ok_or(ValidationError::UnknownOption { field, value: raw })
}

/// Accepts JSON numbers and numeric strings that are whole numbers in 1..=5.
fn parse_satisfaction(value: Option<&Value>) -> Option<u8> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || !(1.0..=5.0).contains(&number) || number.fract() != 0.0 {
        return None;
    }

    Some(number as u8)
}

/// Consent checkbox semantics: `true`, non-zero numbers and the usual
/// affirmative strings count as given.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "on" | "1" | "yes" | "si" | "sí"
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "profile": "Tengo un piso alquilado y estoy harto de gestionarlo",
            "freno": "Los trámites y la burocracia me agobian",
            "zone": "Matogrande",
            "propertyType": "Piso",
            "purchaseRange": "5–10 años",
            "satisfaction": 3,
            "intent": "6–12 meses",
            "analysisCommitment": "Solo quería el informe por ahora",
            "name": "Lucía",
            "email": "lucia@example.es",
            "phone": "600123123",
            "consent": true
        })
    }

    #[test]
    fn test_required_text_stringifies_scalars() {
        let body = json!({"a": 12, "b": false, "c": "  x ", "d": null, "e": [1]});
        let fields = body.as_object().unwrap();
        assert_eq!(required_text(fields, "a").as_deref(), Some("12"));
        assert_eq!(required_text(fields, "b").as_deref(), Some("false"));
        assert_eq!(required_text(fields, "c").as_deref(), Some("x"));
        assert_eq!(required_text(fields, "d"), None);
        assert_eq!(required_text(fields, "e"), None);
        assert_eq!(required_text(fields, "missing"), None);
    }

    #[test]
    fn test_satisfaction_coercion() {
        assert_eq!(parse_satisfaction(Some(&json!(1))), Some(1));
        assert_eq!(parse_satisfaction(Some(&json!(" 5 "))), Some(5));
        assert_eq!(parse_satisfaction(Some(&json!(4.0))), Some(4));
        assert_eq!(parse_satisfaction(Some(&json!(4.5))), None);
        assert_eq!(parse_satisfaction(Some(&json!("abc"))), None);
        assert_eq!(parse_satisfaction(Some(&json!(true))), None);
        assert_eq!(parse_satisfaction(None), None);
    }

    #[test]
    fn test_consent_truthiness() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!("on"))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!("false"))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(None));
    }

    #[test]
    fn test_missing_field_is_named_in_message() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("purchaseRange");

        let err = validate_submit_body(&body).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("purchaseRange"));
        assert_eq!(err.to_string(), "El campo \"purchaseRange\" es obligatorio.");
    }

    #[test]
    fn test_blank_freno_is_treated_as_absent() {
        let mut body = valid_body();
        body["freno"] = json!("   ");

        let answers = validate_submit_body(&body).unwrap();
        assert_eq!(answers.freno, None);
    }

    #[test]
    fn test_unknown_freno_is_rejected() {
        let mut body = valid_body();
        body["freno"] = json!("El vecino");

        let err = validate_submit_body(&body).unwrap_err();
        assert_eq!(err.field(), Some("freno"));
    }

    #[test]
    fn test_normalize_es_phone() {
        assert_eq!(normalize_es_phone("600 123 123").as_deref(), Some("+34600123123"));
        assert_eq!(normalize_es_phone("+34 981 123 456").as_deref(), Some("+34981123456"));
        assert_eq!(normalize_es_phone("123"), None);
    }
}
