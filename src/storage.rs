use crate::errors::AppError;
use crate::models::{Answers, DiagnosticoRow};
use sqlx::PgPool;
use uuid::Uuid;

/// Database storage for completed diagnostic sessions.
///
/// The `diagnosticos` table is append-only: one row per completed session,
/// written once, never updated or deleted by this service. A resubmission
/// from the same respondent creates a second row; there is no idempotency
/// key by design.
pub struct DiagnosticStorage {
    pool: PgPool,
}

impl DiagnosticStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one diagnostic row and return the generated id.
    ///
    /// `email` has already been validated as present by the handler; every
    /// other answer field is stored as nullable, in whatever shape the
    /// respondent left it. `objetivos` only persists when it arrived as a
    /// proper list.
    pub async fn insert_diagnostic(
        &self,
        email: &str,
        answers: &Answers,
        score: Option<f64>,
        nivel: Option<&str>,
    ) -> Result<Uuid, AppError> {
        let objetivos: Option<Vec<String>> = answers.multi("objetivos").map(|o| o.to_vec());

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO diagnosticos (
                nombre,
                email,
                organizacion,
                rol,
                sector,
                pain_point,
                madurez,
                conocimiento_cert,
                objetivos,
                score,
                nivel
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(answers.single("nombre"))
        .bind(email)
        .bind(answers.single("organizacion"))
        .bind(answers.single("rol"))
        .bind(answers.single("sector"))
        .bind(answers.single("pain_point"))
        .bind(answers.single("madurez"))
        .bind(answers.single("conocimiento_cert"))
        .bind(objetivos)
        .bind(score)
        .bind(nivel)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored diagnostic row {}", id);
        Ok(id)
    }

    /// Fetch one persisted diagnostic by id.
    pub async fn fetch_diagnostic(&self, id: Uuid) -> Result<Option<DiagnosticoRow>, AppError> {
        let row = sqlx::query_as::<_, DiagnosticoRow>(
            "SELECT * FROM diagnosticos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
