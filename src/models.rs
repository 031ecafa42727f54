use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

// ============ Answer Set ============

/// A single answer value - one selected option, a multi-select list,
/// or whatever else the client sent.
///
/// The `Other` variant absorbs any unexpected JSON shape (numbers, booleans,
/// nested objects) so deserialization never fails on malformed answer data.
/// Scoring simply skips values it cannot interpret.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
    Other(Value),
}

impl AnswerValue {
    /// The value as a single selected option id or free-text entry.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as a multi-select list of option ids.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// Complete answer set for one respondent session, keyed by question id.
///
/// Built incrementally by the collector and treated as immutable once
/// diagnostic computation begins.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Answers(pub BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Single-valued answer for `key`, if present and of that shape.
    pub fn single(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_single)
    }

    /// Multi-valued answer for `key`, if present and of that shape.
    pub fn multi(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(AnswerValue::as_multi)
    }

    /// True when the multi-select at `key` contains `option`.
    pub fn multi_contains(&self, key: &str, option: &str) -> bool {
        self.multi(key)
            .map(|items| items.iter().any(|item| item == option))
            .unwrap_or(false)
    }
}

// ============ Diagnostic Result ============

/// Lead-qualification tier assigned from the computed percentage.
///
/// Variant order is the qualification ordering (lowest first), so the derived
/// `Ord` matches "higher percentage never yields a lower tier".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Certificacion,
    Optimizacion,
    Aceleracion,
    Transformacional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Certificacion => "certificacion",
            Tier::Optimizacion => "optimizacion",
            Tier::Aceleracion => "aceleracion",
            Tier::Transformacional => "transformacional",
        }
    }
}

/// Recommendation priority, serialized with the Spanish wire values the
/// result page expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "baja")]
    Low,
}

/// One actionable recommendation derived from the answer set.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub icon: &'static str,
}

/// Heuristic fit between the respondent profile and one certification scheme.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationMatch {
    pub name: &'static str,
    #[serde(rename = "match")]
    pub match_value: u8,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub timeframe: &'static str,
}

/// Full diagnostic output - derived fresh on every computation, never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    /// Raw weighted score across all answered fields.
    pub score: u32,
    /// Maximum achievable score given which fields were answered.
    pub max_score: u32,
    /// Rounded score/max ratio. `None` when nothing scorable was answered
    /// (serialized as null, never coerced to 0).
    pub percentage: Option<u8>,
    pub level: Tier,
    pub level_label: &'static str,
    pub level_description: &'static str,
    pub recommendations: Vec<Recommendation>,
    pub certification_match: Vec<CertificationMatch>,
    pub next_steps: Vec<&'static str>,
}

// ============ Database Models ============

/// One persisted diagnostic session, append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DiagnosticoRow {
    /// Generated primary key.
    pub id: Uuid,
    pub nombre: Option<String>,
    /// The only required field on submission.
    pub email: String,
    pub organizacion: Option<String>,
    pub rol: Option<String>,
    pub sector: Option<String>,
    pub pain_point: Option<String>,
    pub madurez: Option<String>,
    pub conocimiento_cert: Option<String>,
    /// Multi-select objectives, stored as a native array column.
    pub objetivos: Option<Vec<String>>,
    /// Percentage as posted by the collector; null when it was undefined.
    pub score: Option<f64>,
    pub nivel: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============ API Request/Response Models ============

/// Body of POST /api/v1/diagnosticos.
///
/// The collector posts the computed percentage under `score` and the tier
/// under `nivel`; both are stored as-is and may be null.
#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub answers: Answers,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub nivel: Option<String>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    /// Generated row id.
    pub id: Uuid,
}

/// Body of POST /api/v1/diagnosticos/evaluar.
#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub answers: Answers,
}

/// Response of the evaluation endpoint: the computed diagnostic plus the
/// personalized insight line.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub result: DiagnosticResult,
    pub insight: String,
}
