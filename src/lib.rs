//! Valuation Lead API Library
//!
//! Server side of the property-valuation wizard: validates submitted answers,
//! scores and classifies the lead, writes the personalized result copy and
//! forwards the finished lead to the agency's automation webhook.
//!
//! # Modules
//!
//! - `api`: HTTP layer.
//! - `domain`: Scoring, validation, copy and static directories.
//! - `integrations`: Outbound webhook delivery.
//! - `agencies`: Agency directory (branding and webhook routing).
//! - `config`: Configuration management.
//! - `copy_builder`: Result copy shown to the visitor.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Wizard answers, scores and lead payloads.
//! - `scoring`: Lead scoring engine.
//! - `submission`: Submission workflow.
//! - `validators`: Input validation and normalization.
//! - `webhook`: Webhook transport.
//! - `zones`: Zone directory (market commentary).

pub mod api;
pub mod domain;
pub mod integrations;

// Re-export primary modules for shared use in tests and the server binary
pub mod agencies;
pub mod config;
pub mod copy_builder;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod submission;
pub mod validators;
pub mod webhook;
pub mod zones;
