//! Result copy shown to the visitor after scoring.

use crate::models::{Category, Profile};
use crate::zones::get_zone_info;

/// Opening used when the profile has no specific sentence.
const GENERIC_PROFILE_SENTENCE: &str =
    "Gracias por contarnos tu situación; con estos datos podemos darte una visión realista de tu propiedad.";

/// Closing for C leads.
const NO_RUSH_SENTENCE: &str =
    "De momento no parece haber urgencia, pero conocer el valor de tu vivienda siempre es un punto de partida inteligente.";

/// Empathetic opening for the declared life situation.
fn profile_sentence(profile: Option<Profile>) -> &'static str {
    match profile {
        Some(Profile::InheritedProperty) => {
            "Heredar un piso abre muchas preguntas; te orientamos sin rodeos jurídicos ni presión."
        }
        Some(Profile::TiredLandlord) => {
            "Gestionar un alquiler desgasta, y hay alternativas reales para dejar de hacerlo."
        }
        Some(Profile::VacantWithCosts) => {
            "Cada mes que el piso sigue vacío tiene un coste que merece la pena conocer con exactitud."
        }
        Some(Profile::LifeChangeBlocked) => {
            "Dar el paso suele ser más sencillo de lo que parece cuando se conocen bien las opciones."
        }
        Some(Profile::LockedCapital) => {
            "Tener capital inmovilizado en ladrillo tiene un coste de oportunidad que se puede calcular."
        }
        Some(Profile::FamilyMatter) => {
            "Las situaciones familiares pendientes tienen más salida de la que parece, y las tratamos con discreción."
        }
        Some(Profile::ValuationOnly) | None => GENERIC_PROFILE_SENTENCE,
    }
}

/// Builds the result paragraph: profile opening, zone trend and a closing
/// chosen by category (A: opportunity, B: caution, C: no rush).
pub fn build_result_copy(category: Category, zone: &str, profile: Option<Profile>) -> String {
    let info = get_zone_info(zone);

    let closing = match category {
        Category::A => info.opportunity_note,
        Category::B => info.caution_note,
        Category::C => NO_RUSH_SENTENCE,
    };

    [profile_sentence(profile), info.trend_note, closing].join(" ")
}
