use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Build the application router.
///
/// API routes sit behind a request-size limit and a per-IP rate limiter; the
/// health check is mounted outside those layers so the platform's probes are
/// never throttled.
pub fn app(state: Arc<handlers::AppState>) -> Router {
    // Rate limiter: sustained requests/second per IP with a burst allowance
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(state.config.rate_limit_per_second)
            .burst_size(state.config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    let protected_routes = Router::new()
        .route("/api/v1/diagnosticos", post(handlers::submit_diagnostic))
        .route(
            "/api/v1/diagnosticos/evaluar",
            post(handlers::evaluate_diagnostic),
        )
        .route("/api/v1/diagnosticos/:id", get(handlers::get_diagnostic))
        .route("/api/v1/preguntas", get(handlers::list_questions))
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
