//! Agency directory: branding and webhook routing per agency.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Key of the fallback agency.
pub const DEFAULT_AGENCY_KEY: &str = "DEFAULT";

/// Static configuration for one agency running the funnel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyConfig {
    pub id: &'static str,
    pub display_name: &'static str,
    pub brand_color: &'static str,
    /// Name of the environment variable holding this agency's webhook URL.
    pub webhook_route_key: &'static str,
    /// WhatsApp number offered on the result screen, when the agency has one.
    pub contact_channel: Option<&'static str>,
}

/// Public view of an agency, safe to hand to the browser.
#[derive(Debug, Clone, Serialize)]
pub struct AgencyBranding {
    pub agency_id: &'static str,
    pub agency_name: &'static str,
    pub brand_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_channel: Option<&'static str>,
}

impl AgencyConfig {
    pub fn branding(&self) -> AgencyBranding {
        AgencyBranding {
            agency_id: self.id,
            agency_name: self.display_name,
            brand_color: self.brand_color,
            contact_channel: self.contact_channel,
        }
    }
}

static AGENCIES: LazyLock<HashMap<&'static str, AgencyConfig>> = LazyLock::new(|| {
    HashMap::from([
        (
            DEFAULT_AGENCY_KEY,
            AgencyConfig {
                id: "default",
                display_name: "Radar Propietario – A Coruña",
                brand_color: "#1d4ed8",
                webhook_route_key: "MAKE_WEBHOOK_DEFAULT",
                contact_channel: None,
            },
        ),
        (
            "coruna01",
            AgencyConfig {
                id: "coruna01",
                display_name: "Inmobiliaria Coruña 01",
                brand_color: "#0f766e",
                webhook_route_key: "MAKE_WEBHOOK_CORUNA01",
                contact_channel: None,
            },
        ),
    ])
});

/// Resolves the agency selected by the `agency` query parameter.
///
/// Missing, blank or unknown selectors resolve to the DEFAULT agency.
pub fn get_agency_config(selector: Option<&str>) -> &'static AgencyConfig {
    selector
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| AGENCIES.get(s))
        .unwrap_or_else(default_agency)
}

pub fn default_agency() -> &'static AgencyConfig {
    &AGENCIES[DEFAULT_AGENCY_KEY]
}

/// All configured agencies (used to load their webhook URLs at startup).
pub fn all_agencies() -> impl Iterator<Item = &'static AgencyConfig> {
    AGENCIES.values()
}
