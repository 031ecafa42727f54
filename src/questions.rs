//! Static question catalog for the diagnostic quiz.
//!
//! Nine questions in a fixed sequence: contact fields, profile cards, the
//! pain-point reflection, the maturity scale and the multi-select goals.
//! Served over HTTP so any collector front-end can render the flow without
//! duplicating the catalog.

use crate::models::{AnswerValue, Answers};
use serde::Serialize;

/// Presentation style of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Text,
    Select,
    Cards,
    Scale,
    MultiSelect,
    PainPoint,
}

/// One selectable option within a question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub value: u8,
}

/// One catalog entry. Titles may carry a `{{nombre}}` placeholder that is
/// interpolated from the respondent's earlier answers.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub options: &'static [QuestionOption],
    pub required: bool,
}

const NO_OPTIONS: &[QuestionOption] = &[];

const QUESTIONS: &[Question] = &[
    Question {
        id: "nombre",
        kind: QuestionKind::Text,
        title: "¡Hola! 👋",
        subtitle: Some("¿Cuál es tu nombre?"),
        placeholder: Some("Escribe tu nombre..."),
        options: NO_OPTIONS,
        required: true,
    },
    Question {
        id: "organizacion",
        kind: QuestionKind::Text,
        title: "¿En qué organización trabajas, {{nombre}}?",
        subtitle: None,
        placeholder: Some("Nombre de tu empresa u organización..."),
        options: NO_OPTIONS,
        required: true,
    },
    Question {
        id: "rol",
        kind: QuestionKind::Cards,
        title: "¿Cuál es tu rol?",
        subtitle: Some("Selecciona el que mejor describa tu posición"),
        placeholder: None,
        options: &[
            QuestionOption {
                id: "sustentabilidad",
                label: "Sustentabilidad",
                emoji: Some("🌱"),
                description: Some("Director/Gerente de Sustentabilidad"),
                value: 5,
            },
            QuestionOption {
                id: "operaciones",
                label: "Operaciones",
                emoji: Some("⚙️"),
                description: Some("Gerente de Operaciones / Facility"),
                value: 4,
            },
            QuestionOption {
                id: "clevel",
                label: "C-Level",
                emoji: Some("👔"),
                description: Some("CEO, COO, CFO, Director General"),
                value: 5,
            },
            QuestionOption {
                id: "ehs",
                label: "EHS",
                emoji: Some("🛡️"),
                description: Some("Seguridad, Higiene y Medio Ambiente"),
                value: 4,
            },
            QuestionOption {
                id: "compras",
                label: "Compras",
                emoji: Some("📦"),
                description: Some("Compras / Supply Chain"),
                value: 3,
            },
            QuestionOption {
                id: "otro",
                label: "Otro",
                emoji: Some("💼"),
                description: Some("Otro rol"),
                value: 2,
            },
        ],
        required: true,
    },
    Question {
        id: "sector",
        kind: QuestionKind::Cards,
        title: "¿En qué sector opera tu organización?",
        subtitle: None,
        placeholder: None,
        options: &[
            QuestionOption {
                id: "manufactura",
                label: "Manufactura",
                emoji: Some("🏭"),
                description: None,
                value: 5,
            },
            QuestionOption {
                id: "retail",
                label: "Retail / Comercio",
                emoji: Some("🛒"),
                description: None,
                value: 4,
            },
            QuestionOption {
                id: "hospitality",
                label: "Hoteles / Restaurantes",
                emoji: Some("🏨"),
                description: None,
                value: 5,
            },
            QuestionOption {
                id: "deportivo",
                label: "Clubes / Deportivo",
                emoji: Some("⛳"),
                description: None,
                value: 5,
            },
            QuestionOption {
                id: "corporativo",
                label: "Oficinas Corporativas",
                emoji: Some("🏢"),
                description: None,
                value: 3,
            },
            QuestionOption {
                id: "educacion",
                label: "Educación",
                emoji: Some("🎓"),
                description: None,
                value: 4,
            },
            QuestionOption {
                id: "salud",
                label: "Salud",
                emoji: Some("🏥"),
                description: None,
                value: 4,
            },
            QuestionOption {
                id: "logistica",
                label: "Logística / Almacenes",
                emoji: Some("📦"),
                description: None,
                value: 5,
            },
            QuestionOption {
                id: "otro",
                label: "Otro",
                emoji: Some("🏗️"),
                description: None,
                value: 3,
            },
        ],
        required: true,
    },
    Question {
        id: "pain_point",
        kind: QuestionKind::PainPoint,
        title: "Reflexiona un momento...",
        subtitle: Some(
            "Si pudieras medir el verdadero costo de tus residuos —no solo lo que pagas por \
             recolección, sino el impacto ambiental, la reputación, las oportunidades perdidas \
             de economía circular— ¿crees que tu organización está tomando las decisiones \
             correctas?",
        ),
        placeholder: None,
        options: &[
            QuestionOption {
                id: "no_se",
                label: "Honestamente, no lo sé",
                emoji: Some("🤔"),
                description: Some("No tenemos visibilidad clara"),
                value: 5,
            },
            QuestionOption {
                id: "dinero_mesa",
                label: "Estamos dejando dinero en la mesa",
                emoji: Some("💸"),
                description: Some("Sé que hay oportunidades perdidas"),
                value: 5,
            },
            QuestionOption {
                id: "sin_norte",
                label: "Hay oportunidad, pero no sabemos por dónde empezar",
                emoji: Some("🧭"),
                description: Some("Necesitamos dirección"),
                value: 4,
            },
            QuestionOption {
                id: "validacion",
                label: "Medimos todo, necesitamos validación externa",
                emoji: Some("✅"),
                description: Some("Estamos listos para certificar"),
                value: 3,
            },
            QuestionOption {
                id: "certificacion",
                label: "Queremos certificación/reconocimiento",
                emoji: Some("🏆"),
                description: Some("Listos para el siguiente nivel"),
                value: 2,
            },
        ],
        required: true,
    },
    Question {
        id: "madurez",
        kind: QuestionKind::Scale,
        title: "¿Dónde te encuentras en tu camino hacia Zero Waste?",
        subtitle: Some("Selecciona el nivel que mejor describa tu situación actual"),
        placeholder: None,
        options: &[
            QuestionOption {
                id: "1",
                label: "Inicio",
                emoji: Some("🌱"),
                description: Some("Sin separación ni medición de residuos"),
                value: 1,
            },
            QuestionOption {
                id: "2",
                label: "Básico",
                emoji: Some("📊"),
                description: Some("Separación básica de algunos materiales"),
                value: 2,
            },
            QuestionOption {
                id: "3",
                label: "Intermedio",
                emoji: Some("♻️"),
                description: Some("Reciclaje activo con medición parcial"),
                value: 3,
            },
            QuestionOption {
                id: "4",
                label: "Avanzado",
                emoji: Some("📈"),
                description: Some("Trazabilidad completa con +70% de desvío"),
                value: 4,
            },
            QuestionOption {
                id: "5",
                label: "Líder",
                emoji: Some("🏆"),
                description: Some("+90% de desvío, listos para certificación"),
                value: 5,
            },
        ],
        required: true,
    },
    Question {
        id: "conocimiento_cert",
        kind: QuestionKind::Cards,
        title: "¿Conoces las certificaciones Zero Waste disponibles?",
        subtitle: Some("Existen varios caminos para validar tu compromiso ambiental"),
        placeholder: None,
        options: &[
            QuestionOption {
                id: "ninguna",
                label: "No conozco ninguna",
                emoji: Some("❓"),
                description: Some("¿Cuáles existen?"),
                value: 5,
            },
            QuestionOption {
                id: "algunas",
                label: "He escuchado de algunas",
                emoji: Some("👂"),
                description: Some("Pero no en detalle"),
                value: 4,
            },
            QuestionOption {
                id: "true",
                label: "Conozco TRUE",
                emoji: Some("🎯"),
                description: Some("La certificación de GBCI"),
                value: 3,
            },
            QuestionOption {
                id: "varias",
                label: "Conozco varias",
                emoji: Some("📚"),
                description: Some("TRUE, UL 2799, Intertek..."),
                value: 2,
            },
        ],
        required: true,
    },
    Question {
        id: "objetivos",
        kind: QuestionKind::MultiSelect,
        title: "¿Qué te gustaría lograr?",
        subtitle: Some("Puedes seleccionar más de una opción"),
        placeholder: None,
        options: &[
            QuestionOption {
                id: "certificacion",
                label: "Certificación Zero Waste",
                emoji: Some("🏆"),
                description: Some("TRUE, UL 2799, Intertek"),
                value: 5,
            },
            QuestionOption {
                id: "trazabilidad",
                label: "Sistema de medición digital",
                emoji: Some("📊"),
                description: Some("Trazabilidad en tiempo real"),
                value: 4,
            },
            QuestionOption {
                id: "estrategia",
                label: "Estrategia de economía circular",
                emoji: Some("♻️"),
                description: Some("Diseño e implementación"),
                value: 4,
            },
            QuestionOption {
                id: "comite",
                label: "Crear comité de sustentabilidad",
                emoji: Some("👥"),
                description: Some("Estructura organizacional y gobernanza"),
                value: 4,
            },
            QuestionOption {
                id: "ahorros",
                label: "Identificar ahorros",
                emoji: Some("💰"),
                description: Some("Nuevas fuentes de valor"),
                value: 3,
            },
            QuestionOption {
                id: "esg",
                label: "Cumplir objetivos ESG",
                emoji: Some("🌍"),
                description: Some("Metas corporativas"),
                value: 3,
            },
            QuestionOption {
                id: "orientacion",
                label: "No estoy seguro",
                emoji: Some("🧭"),
                description: Some("Necesito orientación"),
                value: 5,
            },
        ],
        required: true,
    },
    Question {
        id: "email",
        kind: QuestionKind::Text,
        title: "¡Excelente, {{nombre}}!",
        subtitle: Some("¿Dónde te compartimos tu diagnóstico personalizado?"),
        placeholder: Some("tu@email.com"),
        options: NO_OPTIONS,
        required: true,
    },
];

/// The ordered question catalog.
pub fn catalog() -> &'static [Question] {
    QUESTIONS
}

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Replace the `{{nombre}}` placeholder with the respondent's name, falling
/// back to "amigo" when it has not been answered yet.
pub fn interpolate_title(title: &str, answers: &Answers) -> String {
    let nombre = answers
        .single("nombre")
        .filter(|n| !n.is_empty())
        .unwrap_or("amigo");
    title.replace("{{nombre}}", nombre)
}

/// Whether a question has a usable answer: a non-empty string, a non-empty
/// list, or any other non-null value.
pub fn is_answered(question: &Question, answers: &Answers) -> bool {
    match answers.get(question.id) {
        Some(AnswerValue::Single(s)) => !s.is_empty(),
        Some(AnswerValue::Multi(items)) => !items.is_empty(),
        Some(AnswerValue::Other(value)) => !value.is_null(),
        None => false,
    }
}

/// Ids of required questions still missing a usable answer. The submission
/// handler logs these; incomplete answer sets are stored anyway.
pub fn missing_required(answers: &Answers) -> Vec<&'static str> {
    QUESTIONS
        .iter()
        .filter(|q| q.required && !is_answered(q, answers))
        .map(|q| q.id)
        .collect()
}
