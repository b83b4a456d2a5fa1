//! Zone directory: market commentary per A Coruña neighbourhood.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Market commentary used to personalize the result copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneInfo {
    pub trend_note: &'static str,
    pub opportunity_note: &'static str,
    pub caution_note: &'static str,
}

/// Preset zones in the order the wizard lists them.
const ZONES: &[(&str, ZoneInfo)] = &[
    (
        "Monte Alto",
        ZoneInfo {
            trend_note: "Zona consolidada con demanda estable y perfiles de comprador solvente.",
            opportunity_note: "Las viviendas bien mantenidas tienen buena salida en el mercado actual, especialmente con vistas al mar.",
            caution_note: "La oferta es limitada; si el precio no es competitivo, puede alargarse el tiempo de venta.",
        },
    ),
    (
        "Los Rosales",
        ZoneInfo {
            trend_note: "Barrio familiar con buena conectividad y demanda creciente entre familias jóvenes.",
            opportunity_note: "El mercado muestra interés sostenido en inmuebles de mediano tamaño bien comunicados.",
            caution_note: "La competencia con obra nueva en zonas limítrofes puede influir en el tiempo de venta.",
        },
    ),
    (
        "Matogrande",
        ZoneInfo {
            trend_note: "Zona residencial consolidada con perfil de comprador estable.",
            opportunity_note: "Alta demanda de pisos amplios por parte de familias que priorizan calidad de vida y servicios cercanos.",
            caution_note: "La renovación de la vivienda puede ser determinante para destacar frente a inmuebles más modernos.",
        },
    ),
    (
        "Elviña",
        ZoneInfo {
            trend_note: "Área en transformación con creciente interés por su proximidad al campus universitario.",
            opportunity_note: "Demanda constante de perfil inversor y comprador joven con visión a medio plazo.",
            caution_note: "El mercado puede ser más sensible al precio que en zonas más céntricas de la ciudad.",
        },
    ),
    (
        "Centro",
        ZoneInfo {
            trend_note: "Alta rotación y demanda activa impulsada por la centralidad y los servicios.",
            opportunity_note: "Inmuebles únicos o con características singulares tienen un comprador específico dispuesto a valorarlos.",
            caution_note: "La variabilidad de precios es elevada según la calle y el estado de conservación del inmueble.",
        },
    ),
    (
        "Cuatro Caminos",
        ZoneInfo {
            trend_note: "Zona céntrica con alta densidad y demanda diversa y activa.",
            opportunity_note: "Buena liquidez del mercado para viviendas bien posicionadas en precio.",
            caution_note: "La concentración de oferta puede requerir estrategias de diferenciación para cerrar ventas con agilidad.",
        },
    ),
    (
        "Riazor",
        ZoneInfo {
            trend_note: "Demanda sostenida impulsada por el entorno costero y el acceso a servicios y ocio.",
            opportunity_note: "Perfil de comprador con capacidad adquisitiva interesado en calidad de vida y entorno.",
            caution_note: "Las expectativas de precio son elevadas, lo que requiere una valoración muy precisa para no desviar la demanda.",
        },
    ),
    (
        "Labañou",
        ZoneInfo {
            trend_note: "Barrio residencial tranquilo con demanda familiar estable.",
            opportunity_note: "Buenas condiciones para una venta ordenada en un mercado sólido y sin grandes sobresaltos.",
            caution_note: "La percepción de menor dinamismo comercial puede ser un freno para ciertos perfiles de comprador.",
        },
    ),
    (
        "Agra do Orzán",
        ZoneInfo {
            trend_note: "Zona con demanda activa y precios más accesibles que en otras áreas céntricas.",
            opportunity_note: "Atractiva para compradores primerizos e inversores por su relación precio-ubicación.",
            caution_note: "El estado de conservación del inmueble tiene un impacto directo en el precio final obtenido.",
        },
    ),
    (
        "Mesoiro",
        ZoneInfo {
            trend_note: "Área periférica con crecimiento residencial gradual.",
            opportunity_note: "Interés creciente de familias que priorizan espacio y tranquilidad sobre la centralidad.",
            caution_note: "La dependencia del vehículo privado puede limitar el perfil de comprador interesado.",
        },
    ),
    (
        "Eirís",
        ZoneInfo {
            trend_note: "Zona en proceso de consolidación con demanda moderada.",
            opportunity_note: "El precio de entrada más accesible atrae a un perfil de comprador en expansión.",
            caution_note: "La percepción de ubicación periférica puede alargar el proceso de venta respecto a zonas más céntricas.",
        },
    ),
    (
        "Orillamar",
        ZoneInfo {
            trend_note: "Barrio histórico con carácter propio y demanda de perfil cultural.",
            opportunity_note: "Los inmuebles con encanto o rehabilitados tienen buena acogida entre compradores selectivos.",
            caution_note: "El mercado es nicho y puede requerir más tiempo para encontrar al comprador adecuado.",
        },
    ),
];

/// Commentary for free-text municipalities and anything not listed above.
pub const DEFAULT_ZONE_INFO: ZoneInfo = ZoneInfo {
    trend_note: "Zona con mercado activo y demanda sostenida en A Coruña.",
    opportunity_note: "Hay interés real de compradores que buscan vivienda en tu área.",
    caution_note: "Una valoración precisa es clave para no dejar dinero sobre la mesa.",
};

static ZONE_MAP: LazyLock<HashMap<&'static str, &'static ZoneInfo>> =
    LazyLock::new(|| ZONES.iter().map(|(name, info)| (*name, info)).collect());

/// Looks up a zone, falling back to `DEFAULT_ZONE_INFO`.
///
/// Exact match first, then a case-insensitive match so that typed-in
/// variants such as "monte alto" still get the neighbourhood copy.
pub fn get_zone_info(zone: &str) -> &'static ZoneInfo {
    let zone = zone.trim();
    if let Some(info) = ZONE_MAP.get(zone) {
        return info;
    }

    let lowered = zone.to_lowercase();
    ZONES
        .iter()
        .find(|(name, _)| name.to_lowercase() == lowered)
        .map(|(_, info)| info)
        .unwrap_or(&DEFAULT_ZONE_INFO)
}

/// Names of the preset zones, in presentation order.
pub fn zone_names() -> Vec<&'static str> {
    ZONES.iter().map(|(name, _)| *name).collect()
}
