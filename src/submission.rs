//! Submission workflow shared by the HTTP handler and tests.
//!
//! Steps:
//! 1. Resolve the agency (DEFAULT when missing/unknown)
//! 2. Parse and validate the body
//! 3. Score the answers
//! 4. Build the result copy
//! 5. Assemble the lead payload
//! 6. Forward it to the agency webhook (single attempt, bounded)
//!
//! Delivery never fails the request: the visitor gets their score and copy
//! whatever the webhook does.

use crate::agencies::{get_agency_config, AgencyConfig};
use crate::config::Config;
use crate::copy_builder::build_result_copy;
use crate::errors::AppError;
use crate::models::{LeadPayload, ScoreResult, SubmitResponse, WizardAnswers};
use crate::scoring::score_breakdown;
use crate::validators::{normalize_es_phone, validate_submit_body};
use crate::webhook::{DeliveryOutcome, WebhookTransport};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

/// Runs one submission end to end.
///
/// # Arguments
///
/// * `config` - Webhook destinations.
/// * `transport` - Outbound channel for the finished lead.
/// * `agency_selector` - Value of the `agency` query parameter, if any.
/// * `body` - Raw request body.
///
/// # Returns
///
/// * `Result<SubmitResponse, AppError>` - Score, category, copy and delivery flag,
///   or a client error for malformed/invalid bodies.
pub async fn process_submission(
    config: &Config,
    transport: &dyn WebhookTransport,
    agency_selector: Option<&str>,
    body: &[u8],
) -> Result<SubmitResponse, AppError> {
    let agency = get_agency_config(agency_selector);

    let raw: Value = serde_json::from_slice(body)?;
    let answers = validate_submit_body(&raw)?;

    let breakdown = score_breakdown(&answers);
    let result = breakdown.result();
    let result_copy = build_result_copy(result.category, &answers.zone, Some(answers.profile));

    let payload = build_lead_payload(answers, agency, result);
    tracing::info!(
        "Scored lead {} for agency {}: score={}, category={}",
        payload.lead_id,
        agency.id,
        result.score,
        result.category
    );
    tracing::debug!("Score breakdown for lead {}: {:?}", payload.lead_id, breakdown.components);

    let delivered = forward_lead(config, transport, agency, &payload).await;

    Ok(SubmitResponse {
        ok: true,
        score: result.score,
        category: result.category,
        result_copy,
        delivered,
    })
}

/// Attaches agency, score and submission metadata to the answers.
pub fn build_lead_payload(
    answers: WizardAnswers,
    agency: &AgencyConfig,
    result: ScoreResult,
) -> LeadPayload {
    LeadPayload {
        phone_e164: normalize_es_phone(&answers.phone),
        answers,
        lead_id: Uuid::new_v4(),
        agency_id: agency.id.to_string(),
        agency_name: agency.display_name.to_string(),
        score: result.score,
        category: result.category,
        submitted_at: Utc::now(),
    }
}

/// Sends the lead to the agency webhook; returns whether it was accepted.
///
/// No configured destination means no network call at all.
async fn forward_lead(
    config: &Config,
    transport: &dyn WebhookTransport,
    agency: &AgencyConfig,
    payload: &LeadPayload,
) -> bool {
    let Some(url) = config.webhook_url_for(agency) else {
        tracing::warn!(
            "No webhook URL configured for agency {}. Set MAKE_WEBHOOK_DEFAULT (or {}); lead {} not forwarded",
            agency.id,
            agency.webhook_route_key,
            payload.lead_id
        );
        return false;
    };

    let outcome = transport.deliver(url, payload).await;
    match &outcome {
        DeliveryOutcome::Delivered => {
            tracing::info!("✓ Lead {} delivered to webhook", payload.lead_id)
        }
        DeliveryOutcome::FailedStatus(status) => tracing::error!(
            "Webhook responded with HTTP {} for agency {} (lead {})",
            status,
            agency.id,
            payload.lead_id
        ),
        DeliveryOutcome::FailedNetwork { .. } => tracing::error!(
            "Webhook delivery failed for agency {} (lead {}): {}",
            agency.id,
            payload.lead_id,
            outcome
        ),
    }

    outcome.is_delivered()
}
