//! Diagnostic scoring engine.
//!
//! Pure, deterministic transformation of an answer set into a qualification
//! result: weighted score, tier, recommendations, certification matches and
//! next steps. No I/O, no randomness, no shared state - every function here
//! is safely callable from concurrent sessions.
//!
//! Missing or malformed answer fields never raise; they contribute zero to
//! the score and are skipped in text lookups.

use crate::models::{
    Answers, CertificationMatch, DiagnosticResult, Priority, Recommendation, Tier,
};

// ============ Score tables ============
//
// Static lookup tables, loaded once at compile time. Less maturity and less
// certification knowledge score HIGHER - the scale models opportunity for
// the consultancy, not organizational excellence.

const PAIN_POINT_POINTS: &[(&str, u32)] = &[
    ("no_se", 25),
    ("dinero_mesa", 25),
    ("sin_norte", 20),
    ("validacion", 15),
    ("certificacion", 10),
];
const PAIN_POINT_WEIGHT: u32 = 25;

const MADUREZ_POINTS: &[(&str, u32)] = &[("1", 25), ("2", 20), ("3", 15), ("4", 10), ("5", 5)];
const MADUREZ_WEIGHT: u32 = 25;

const CONOCIMIENTO_POINTS: &[(&str, u32)] =
    &[("ninguna", 20), ("algunas", 15), ("true", 10), ("varias", 5)];
const CONOCIMIENTO_WEIGHT: u32 = 20;

const OBJETIVO_POINTS_EACH: u32 = 5;
const OBJETIVOS_WEIGHT: u32 = 25;

const HIGH_POTENTIAL_SECTORS: &[&str] = &["manufactura", "hospitality", "deportivo", "logistica"];
const SECTOR_HIGH_POINTS: u32 = 10;
const SECTOR_BASE_POINTS: u32 = 5;
const SECTOR_WEIGHT: u32 = 10;

/// Points for `key` in a static table; unknown option ids score 0.
fn table_points(table: &[(&str, u32)], key: &str) -> u32 {
    table
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn single_matches(answers: &Answers, key: &str, options: &[&str]) -> bool {
    answers
        .single(key)
        .map(|value| options.contains(&value))
        .unwrap_or(false)
}

/// Single-valued answer, with an empty string counting as absent - an empty
/// selection must not open the field's weight in the maximum.
fn non_empty_single<'a>(answers: &'a Answers, key: &str) -> Option<&'a str> {
    answers.single(key).filter(|value| !value.is_empty())
}

// ============ Score computation ============

/// Weighted score and maximum achievable score for an answer set.
///
/// Each field contributes to the maximum only when it is present in the
/// expected shape, so a partially answered quiz is graded against what was
/// actually asked of it. An empty `objetivos` list still opens its weight:
/// "present but empty" is not "absent".
pub fn score_answers(answers: &Answers) -> (u32, u32) {
    let mut total = 0;
    let mut max = 0;

    if let Some(pain_point) = non_empty_single(answers, "pain_point") {
        total += table_points(PAIN_POINT_POINTS, pain_point);
        max += PAIN_POINT_WEIGHT;
    }

    if let Some(madurez) = non_empty_single(answers, "madurez") {
        total += table_points(MADUREZ_POINTS, madurez);
        max += MADUREZ_WEIGHT;
    }

    if let Some(conocimiento) = non_empty_single(answers, "conocimiento_cert") {
        total += table_points(CONOCIMIENTO_POINTS, conocimiento);
        max += CONOCIMIENTO_WEIGHT;
    }

    if let Some(objetivos) = answers.multi("objetivos") {
        total += (objetivos.len() as u32)
            .saturating_mul(OBJETIVO_POINTS_EACH)
            .min(OBJETIVOS_WEIGHT);
        max += OBJETIVOS_WEIGHT;
    }

    if let Some(sector) = non_empty_single(answers, "sector") {
        total += if HIGH_POTENTIAL_SECTORS.contains(&sector) {
            SECTOR_HIGH_POINTS
        } else {
            SECTOR_BASE_POINTS
        };
        max += SECTOR_WEIGHT;
    }

    (total, max)
}

/// Rounded percentage, or `None` when no scorable field was present at all.
///
/// The undefined case must stay explicit: downstream tier selection treats it
/// as failing every threshold, it is never coerced to 0.
pub fn percentage(total: u32, max: u32) -> Option<u8> {
    if max == 0 {
        return None;
    }
    Some(((total as f64 / max as f64) * 100.0).round() as u8)
}

// ============ Tier classification ============

/// First matching threshold wins, evaluated high to low. An undefined
/// percentage fails every threshold and lands on the lowest tier.
pub fn tier_for(percentage: Option<u8>) -> Tier {
    match percentage {
        Some(p) if p >= 80 => Tier::Transformacional,
        Some(p) if p >= 60 => Tier::Aceleracion,
        Some(p) if p >= 40 => Tier::Optimizacion,
        _ => Tier::Certificacion,
    }
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Transformacional => "Oportunidad Transformacional",
            Tier::Aceleracion => "Listo para Acelerar",
            Tier::Optimizacion => "Optimización Estratégica",
            Tier::Certificacion => "Listo para Certificar",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Transformacional => {
                "Tu organización tiene un potencial excepcional de transformación. \
                 Los beneficios de implementar una estrategia Zero Waste serían significativos."
            }
            Tier::Aceleracion => {
                "Ya tienes bases sólidas. Es momento de estructurar y acelerar tu camino \
                 hacia Zero Waste con las herramientas correctas."
            }
            Tier::Optimizacion => {
                "Tu organización está en buen camino. Con ajustes estratégicos puedes \
                 alcanzar el siguiente nivel de sustentabilidad."
            }
            Tier::Certificacion => {
                "¡Felicidades! Tu organización está madura para buscar certificación \
                 formal y validar su liderazgo ambiental."
            }
        }
    }
}

// ============ Recommendations ============

const MAX_RECOMMENDATIONS: usize = 4;

/// Ordered rule evaluation over the answer set. Each matching rule appends
/// one recommendation; the list is truncated to the first four matches in
/// rule order, never re-sorted by priority.
pub fn recommendations(answers: &Answers) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if single_matches(answers, "pain_point", &["no_se", "dinero_mesa"]) {
        out.push(Recommendation {
            title: "Diagnóstico de Flujo de Materiales",
            description: "Mapear todos los puntos de generación para identificar \
                          oportunidades ocultas de valor y reducción de costos.",
            priority: Priority::High,
            icon: "🔍",
        });
    }

    if single_matches(answers, "pain_point", &["sin_norte"]) {
        out.push(Recommendation {
            title: "Roadmap Zero Waste Personalizado",
            description: "Diseñar una estrategia clara con hitos medibles y timeline \
                          realista para tu organización.",
            priority: Priority::High,
            icon: "🗺️",
        });
    }

    if single_matches(answers, "madurez", &["1", "2"]) {
        out.push(Recommendation {
            title: "Implementación de Sistema de Separación",
            description: "Establecer infraestructura básica de segregación en puntos \
                          clave de generación.",
            priority: Priority::High,
            icon: "♻️",
        });
    }

    if single_matches(answers, "madurez", &["3", "4"]) {
        out.push(Recommendation {
            title: "Plataforma de Trazabilidad Digital",
            description: "Implementar sistema de registro y monitoreo en tiempo real \
                          para optimizar decisiones.",
            priority: Priority::Medium,
            icon: "📊",
        });
    }

    if answers.multi_contains("objetivos", "certificacion") {
        out.push(Recommendation {
            title: "Evaluación de Brechas para Certificación",
            description: "Análisis detallado de requisitos vs estado actual para \
                          determinar el camino más eficiente.",
            priority: Priority::High,
            icon: "🎯",
        });
    }

    if answers.multi_contains("objetivos", "ahorros") {
        out.push(Recommendation {
            title: "Análisis de Valor Circular",
            description: "Identificar streams de materiales con potencial de \
                          monetización o reducción de costos.",
            priority: Priority::Medium,
            icon: "💰",
        });
    }

    if answers.multi_contains("objetivos", "esg") {
        out.push(Recommendation {
            title: "Alineación con Framework ESG",
            description: "Estructurar métricas e indicadores compatibles con reportes \
                          de sustentabilidad corporativa.",
            priority: Priority::Medium,
            icon: "🌍",
        });
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

// ============ Certification matching ============

/// Base value plus the bonuses whose condition held, hard-capped.
fn bounded_match(base: u32, bonuses: &[(bool, u32)], cap: u32) -> u8 {
    let total = base
        + bonuses
            .iter()
            .filter(|(hit, _)| *hit)
            .map(|(_, bonus)| bonus)
            .sum::<u32>();
    total.min(cap) as u8
}

/// Fit of the three certification schemes against the respondent profile,
/// sorted descending by match. The sort is stable, so equal matches keep
/// their catalog order (TRUE, UL 2799, Intertek).
pub fn certification_matches(answers: &Answers) -> Vec<CertificationMatch> {
    let mut certifications = vec![
        CertificationMatch {
            name: "TRUE (GBCI)",
            match_value: bounded_match(
                70,
                &[
                    (single_matches(answers, "madurez", &["4", "5"]), 15),
                    (answers.multi_contains("objetivos", "certificacion"), 10),
                    (
                        single_matches(answers, "sector", &["deportivo", "hospitality", "corporativo"]),
                        5,
                    ),
                ],
                98,
            ),
            description: "La certificación más reconocida globalmente. Enfoque holístico \
                          con 81 créditos posibles.",
            pros: &[
                "Reconocimiento global",
                "Metodología probada",
                "Comunidad activa",
                "Compatible con LEED",
            ],
            timeframe: "6-12 meses",
        },
        CertificationMatch {
            name: "UL 2799",
            match_value: bounded_match(
                65,
                &[
                    (
                        single_matches(answers, "sector", &["manufactura", "logistica"]),
                        20,
                    ),
                    (single_matches(answers, "madurez", &["3", "4"]), 10),
                ],
                95,
            ),
            description: "Estándar técnico enfocado en validación de tasas de desvío. \
                          Ideal para manufactura.",
            pros: &[
                "Proceso más directo",
                "Enfoque cuantitativo",
                "Reconocido en industria",
                "Auditoría rigurosa",
            ],
            timeframe: "4-8 meses",
        },
        CertificationMatch {
            name: "Intertek Zero Waste",
            match_value: bounded_match(
                60,
                &[
                    (answers.multi_contains("objetivos", "esg"), 15),
                    (single_matches(answers, "madurez", &["2", "3"]), 10),
                ],
                90,
            ),
            description: "Certificación con opciones de niveles progresivos. Buena \
                          entrada al mundo Zero Waste.",
            pros: &[
                "Niveles progresivos",
                "Soporte técnico",
                "Flexibilidad",
                "Costo competitivo",
            ],
            timeframe: "3-6 meses",
        },
    ];

    certifications.sort_by(|a, b| b.match_value.cmp(&a.match_value));
    certifications
}

// ============ Next steps ============

/// Ordered next-step sequence: fixed opener, one tier-specific pair, fixed
/// closer. Presented to the respondent as a numbered list.
pub fn next_steps(tier: Tier) -> Vec<&'static str> {
    let mut steps = vec!["Revisión de resultados con especialista EcoNova (30 min, sin costo)"];

    match tier {
        Tier::Transformacional | Tier::Aceleracion => {
            steps.push("Diagnóstico presencial de puntos de generación");
            steps.push("Propuesta de roadmap personalizado");
        }
        Tier::Optimizacion => {
            steps.push("Análisis de brechas vs certificación objetivo");
            steps.push("Demo de Plataforma de Trazabilidad EcoNova");
        }
        Tier::Certificacion => {
            steps.push("Evaluación de documentación existente");
            steps.push("Timeline y presupuesto para certificación");
        }
    }

    steps.push("Definición de siguiente fase de colaboración");
    steps
}

// ============ Entry point ============

/// Compute the full diagnostic for one answer set.
pub fn compute_diagnostic(answers: &Answers) -> DiagnosticResult {
    let (score, max_score) = score_answers(answers);
    let percentage = percentage(score, max_score);
    let level = tier_for(percentage);

    DiagnosticResult {
        score,
        max_score,
        percentage,
        level,
        level_label: level.label(),
        level_description: level.description(),
        recommendations: recommendations(answers),
        certification_match: certification_matches(answers),
        next_steps: next_steps(level),
    }
}

// ============ Insight text ============

/// Personalized one-liner keyed on the reported pain point, with a generic
/// fallback when it is absent or unrecognized. Pure string formatting.
pub fn insight_for(answers: &Answers) -> String {
    let nombre = answers
        .single("nombre")
        .filter(|n| !n.is_empty())
        .unwrap_or("amigo");

    match answers.single("pain_point") {
        Some("no_se") => format!(
            "{nombre}, la falta de visibilidad es el primer obstáculo que debemos resolver. \
             Sin datos precisos, es imposible tomar decisiones estratégicas sobre residuos."
        ),
        Some("dinero_mesa") => format!(
            "{nombre}, tu intuición es correcta. Organizaciones similares han descubierto \
             que hasta el 40% de sus \"residuos\" tienen valor recuperable."
        ),
        Some("sin_norte") => format!(
            "{nombre}, tener clara la oportunidad pero no el camino es muy común. \
             La buena noticia: existe una metodología probada para estructurar esto."
        ),
        Some("validacion") => format!(
            "{nombre}, ya tienes el trabajo duro hecho. Una certificación externa validará \
             tu esfuerzo y abrirá nuevas oportunidades de negocio."
        ),
        Some("certificacion") => format!(
            "{nombre}, estás listo para el siguiente nivel. Vamos a encontrar la \
             certificación que mejor se alinee con tus objetivos."
        ),
        _ => format!(
            "{nombre}, tu organización tiene potencial significativo para mejorar su \
             gestión de residuos."
        ),
    }
}
