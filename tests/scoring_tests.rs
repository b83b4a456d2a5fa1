/// Unit tests for validation, scoring and result copy
/// Covers the worked examples and the validation contract of the submit endpoint
use serde_json::{json, Value};
use valuation_lead_api::domain::directories::{get_zone_info, DEFAULT_ZONE_INFO};
use valuation_lead_api::copy_builder::build_result_copy;
use valuation_lead_api::models::{Blocker, Category, Intent, Profile, PurchaseRange};
use valuation_lead_api::scoring::compute_score;
use valuation_lead_api::validators::{validate_submit_body, ValidationError};

fn valid_body() -> Value {
    json!({
        "profile": "El piso lleva tiempo vacío y pagando gastos",
        "zone": "Monte Alto",
        "propertyType": "Piso",
        "purchaseRange": "Más de 20 años",
        "satisfaction": 5,
        "intent": "0–6 meses",
        "analysisCommitment": "Sí, quiero que me llamen para verlo",
        "name": "Xoán Pérez",
        "email": "xoan@example.es",
        "phone": "600123456",
        "consent": true
    })
}

fn with(mut body: Value, field: &str, value: Value) -> Value {
    body[field] = value;
    body
}

fn without(mut body: Value, field: &str) -> Value {
    body.as_object_mut().unwrap().remove(field);
    body
}

#[cfg(test)]
mod worked_examples {
    use super::*;

    #[test]
    fn test_vacant_flat_short_horizon_is_category_a() {
        let answers = validate_submit_body(&valid_body()).unwrap();
        let result = compute_score(&answers);

        // profile 2 + discomfort 2 + horizon 3 + ownership 1
        assert_eq!(result.score, 8);
        assert_eq!(result.category, Category::A);
    }

    #[test]
    fn test_no_urgency_lead_is_category_c() {
        let body = valid_body();
        let body = with(body, "satisfaction", json!(1));
        let body = with(body, "intent", json!("Más adelante"));
        let body = with(body, "profile", json!("Solo quiero saber cuánto vale mi propiedad"));
        let body = with(body, "purchaseRange", json!("Menos de 5 años"));

        let answers = validate_submit_body(&body).unwrap();
        let result = compute_score(&answers);

        assert_eq!(result.score, 0);
        assert_eq!(result.category, Category::C);
    }

    #[test]
    fn test_blocker_adds_points_when_present() {
        let body = with(valid_body(), "freno", json!("No sé cuánto vale realmente mi propiedad"));
        let answers = validate_submit_body(&body).unwrap();

        assert_eq!(answers.freno, Some(Blocker::UnknownValue));
        assert_eq!(compute_score(&answers).score, 10);
    }

    #[test]
    fn test_analysis_commitment_does_not_score() {
        let wants_call = validate_submit_body(&valid_body()).unwrap();
        let report_only = validate_submit_body(&with(
            valid_body(),
            "analysisCommitment",
            json!("Solo quería el informe por ahora"),
        ))
        .unwrap();

        assert_eq!(compute_score(&wants_call), compute_score(&report_only));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answers = validate_submit_body(&valid_body()).unwrap();
        let first = compute_score(&answers);
        for _ in 0..10 {
            assert_eq!(compute_score(&answers), first);
        }
    }
}

#[cfg(test)]
mod validation_rejections {
    use super::*;

    #[test]
    fn test_rejects_non_object_bodies() {
        for body in [json!(null), json!([]), json!("texto"), json!(42)] {
            assert_eq!(
                validate_submit_body(&body),
                Err(ValidationError::InvalidBody)
            );
        }
    }

    #[test]
    fn test_rejects_empty_object_on_first_field() {
        assert_eq!(
            validate_submit_body(&json!({})),
            Err(ValidationError::MissingField("profile"))
        );
    }

    #[test]
    fn test_rejects_each_missing_required_field() {
        for field in [
            "profile",
            "zone",
            "propertyType",
            "purchaseRange",
            "intent",
            "analysisCommitment",
            "name",
            "email",
            "phone",
        ] {
            let err = validate_submit_body(&without(valid_body(), field)).unwrap_err();
            assert_eq!(err, ValidationError::MissingField(field), "field {}", field);
        }
    }

    #[test]
    fn test_rejects_whitespace_only_field() {
        let err = validate_submit_body(&with(valid_body(), "name", json!("   "))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["not-an-email", "a@b", "a b@c.es", "@example.es"] {
            let err = validate_submit_body(&with(valid_body(), "email", json!(email))).unwrap_err();
            assert_eq!(err, ValidationError::InvalidEmail, "email {}", email);
        }
    }

    #[test]
    fn test_rejects_satisfaction_out_of_range() {
        for satisfaction in [json!(0), json!(6), json!("7"), json!(null), json!("alto")] {
            let err = validate_submit_body(&with(valid_body(), "satisfaction", satisfaction))
                .unwrap_err();
            assert_eq!(err, ValidationError::InvalidSatisfaction);
        }
        let err = validate_submit_body(&without(valid_body(), "satisfaction")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSatisfaction);
    }

    #[test]
    fn test_rejects_missing_consent() {
        let err = validate_submit_body(&with(valid_body(), "consent", json!(false))).unwrap_err();
        assert_eq!(err, ValidationError::ConsentRequired);

        let err = validate_submit_body(&without(valid_body(), "consent")).unwrap_err();
        assert_eq!(err, ValidationError::ConsentRequired);
    }

    #[test]
    fn test_rejects_unknown_option_labels() {
        let err = validate_submit_body(&with(valid_body(), "intent", json!("Mañana mismo")))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownOption {
                field: "intent",
                value: "Mañana mismo".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "El valor \"Mañana mismo\" no es una opción válida para \"intent\"."
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Bad email and bad satisfaction: email is checked first
        let body = with(valid_body(), "email", json!("nope"));
        let body = with(body, "satisfaction", json!(9));
        assert_eq!(
            validate_submit_body(&body),
            Err(ValidationError::InvalidEmail)
        );
    }
}

#[cfg(test)]
mod validation_normalization {
    use super::*;

    #[test]
    fn test_email_is_lower_cased() {
        let body = with(valid_body(), "email", json!("  Xoan.Perez@Example.ES "));
        let answers = validate_submit_body(&body).unwrap();
        assert_eq!(answers.email, "xoan.perez@example.es");
    }

    #[test]
    fn test_strings_are_trimmed() {
        let body = with(valid_body(), "name", json!("  Xoán  "));
        let body = with(body, "zone", json!("\tBetanzos \n"));
        let body = with(body, "profile", json!("  El piso lleva tiempo vacío y pagando gastos "));

        let answers = validate_submit_body(&body).unwrap();
        assert_eq!(answers.name, "Xoán");
        assert_eq!(answers.zone, "Betanzos");
        assert_eq!(answers.profile, Profile::VacantWithCosts);
    }

    #[test]
    fn test_numeric_string_satisfaction_is_coerced() {
        let answers =
            validate_submit_body(&with(valid_body(), "satisfaction", json!("4"))).unwrap();
        assert_eq!(answers.satisfaction, 4);
    }

    #[test]
    fn test_consent_is_normalized_to_true() {
        let answers = validate_submit_body(&with(valid_body(), "consent", json!("on"))).unwrap();
        assert!(answers.consent);
    }

    #[test]
    fn test_ascii_hyphen_ranges_are_accepted() {
        let body = with(valid_body(), "intent", json!("6-12 meses"));
        let body = with(body, "purchaseRange", json!("10-20 años"));

        let answers = validate_submit_body(&body).unwrap();
        assert_eq!(answers.intent, Intent::SixToTwelveMonths);
        assert_eq!(answers.purchase_range, PurchaseRange::TenToTwentyYears);
    }
}

#[cfg(test)]
mod result_copy {
    use super::*;

    #[test]
    fn test_custom_zone_gets_default_copy_not_error() {
        let answers = validate_submit_body(&with(valid_body(), "zone", json!("Pontedeume"))).unwrap();
        let result = compute_score(&answers);
        let copy = build_result_copy(result.category, &answers.zone, Some(answers.profile));

        assert!(copy.contains(DEFAULT_ZONE_INFO.trend_note));
        assert!(copy.contains(DEFAULT_ZONE_INFO.opportunity_note));
    }

    #[test]
    fn test_preset_zone_copy_uses_zone_notes() {
        let copy = build_result_copy(Category::B, "Orillamar", Some(Profile::LockedCapital));
        let info = get_zone_info("Orillamar");

        assert!(copy.contains(info.trend_note));
        assert!(copy.contains(info.caution_note));
        assert!(!copy.contains(info.opportunity_note));
    }
}
