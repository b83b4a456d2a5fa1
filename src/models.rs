use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

// ============ Answer Options ============

/// Normalizes an option label for comparison.
///
/// The wizard uses an en dash in range labels ("0–6 meses"); hand-written
/// clients tend to send an ASCII hyphen instead.
fn normalize_label(raw: &str) -> String {
    raw.trim().replace('-', "–")
}

/// Declares a closed set of wizard answers.
///
/// Each variant is bound to the exact label the wizard sends, which is also
/// the value forwarded to the webhook.
macro_rules! answer_options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every option, in the order the wizard presents them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown to the visitor and sent downstream.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Parses a submitted label, tolerating surrounding whitespace and
            /// ASCII hyphens in place of en dashes.
            pub fn from_label(raw: &str) -> Option<Self> {
                let wanted = normalize_label(raw);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| normalize_label(option.label()) == wanted)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

answer_options! {
    /// Owner's life situation ("¿Cuál es tu situación?").
    Profile {
        InheritedProperty => "Heredé un piso y no sé qué hacer con él",
        TiredLandlord => "Tengo un piso alquilado y estoy harto de gestionarlo",
        VacantWithCosts => "El piso lleva tiempo vacío y pagando gastos",
        LifeChangeBlocked => "Quiero cambiar de vida pero el piso me lo impide",
        LockedCapital => "Tengo capital bloqueado en ladrillo y necesito liquidez",
        FamilyMatter => "Hay un tema familiar sin resolver (herencia, separación)",
        ValuationOnly => "Solo quiero saber cuánto vale mi propiedad",
    }
}

answer_options! {
    /// What is holding the owner back from deciding ("freno").
    Blocker {
        UnknownValue => "No sé cuánto vale realmente mi propiedad",
        UnsureTiming => "No sé si es buen momento para vender o alquilar",
        FearOfRegret => "Miedo a arrepentirme o tomar la decisión equivocada",
        Paperwork => "Los trámites y la burocracia me agobian",
        FamilyDisagreement => "Desacuerdo familiar o situación complicada",
        JustBrowsing => "Nada me frena, solo busco información",
    }
}

answer_options! {
    /// Kind of property being valued.
    PropertyType {
        Flat => "Piso",
        Penthouse => "Ático",
        Duplex => "Dúplex",
        House => "Casa / Chalet",
        CommercialPremises => "Local comercial",
        Garage => "Garaje / Plaza",
        Land => "Terreno o finca",
        Other => "Otro",
    }
}

answer_options! {
    /// How long the owner has held the property.
    PurchaseRange {
        UnderFiveYears => "Menos de 5 años",
        FiveToTenYears => "5–10 años",
        TenToTwentyYears => "10–20 años",
        OverTwentyYears => "Más de 20 años",
        Inherited => "Herencia",
    }
}

answer_options! {
    /// Time horizon for taking a decision.
    Intent {
        WithinSixMonths => "0–6 meses",
        SixToTwelveMonths => "6–12 meses",
        TwelveToTwentyFourMonths => "12–24 meses",
        Later => "Más adelante",
        NotSure => "No lo sé",
    }
}

answer_options! {
    /// Whether the visitor wants a call to go through the analysis.
    AnalysisCommitment {
        WantsCall => "Sí, quiero que me llamen para verlo",
        ReportOnly => "Solo quería el informe por ahora",
    }
}

// ============ Wizard Models ============

/// A validated wizard submission.
///
/// Only built by `validators::validate_submit_body`; every field has already
/// been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardAnswers {
    pub profile: Profile,
    /// Optional: older wizard revisions do not ask for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freno: Option<Blocker>,
    /// Preset zone name or a free-text municipality.
    pub zone: String,
    pub property_type: PropertyType,
    pub purchase_range: PurchaseRange,
    /// 1 = does not weigh on the owner, 5 = heavy stress or cost.
    pub satisfaction: u8,
    pub intent: Intent,
    pub analysis_commitment: AnalysisCommitment,
    pub name: String,
    /// Lower-cased.
    pub email: String,
    pub phone: String,
    pub consent: bool,
}

/// Lead priority tier. A leads are worth an immediate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    /// Classifies a clamped score: 0-3 → C, 4-6 → B, 7-10 → A.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Category::C,
            4..=6 => Category::B,
            _ => Category::A,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
        };
        f.write_str(letter)
    }
}

/// Interest score and the tier derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Always within 0..=10.
    pub score: u8,
    pub category: Category,
}

// ============ Outbound Models ============

/// Full lead record forwarded to the automation webhook.
///
/// Wizard fields keep their camelCase names; the fields added by the server
/// are snake_case, which is what the downstream scenario maps.
#[derive(Debug, Clone, Serialize)]
pub struct LeadPayload {
    #[serde(flatten)]
    pub answers: WizardAnswers,
    /// Phone in E.164 form when it parses as a Spanish number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_e164: Option<String>,
    /// Correlation id shared by the payload and the service logs.
    pub lead_id: Uuid,
    pub agency_id: String,
    pub agency_name: String,
    pub score: u8,
    pub category: Category,
    pub submitted_at: DateTime<Utc>,
}

/// Body returned to the wizard after a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub score: u8,
    pub category: Category,
    #[serde(rename = "resultCopy")]
    pub result_copy: String,
    /// Whether the webhook accepted the lead.
    pub delivered: bool,
}
