//! # API REST
//!
//! REST API implementation for the SIRS calculator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Uses `api-shared` for the wire types and `sirs-core` for evaluation.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{convert, pb, HealthService};
use sirs_core::{Assessment, CriteriaService};

/// Application state shared across REST API handlers
#[derive(Clone, Default)]
pub struct AppState {
    criteria_service: CriteriaService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, form, evaluate, reference),
    components(schemas(
        pb::HealthRes,
        pb::FormRes,
        pb::Question,
        pb::EvaluateReq,
        pb::EvaluateRes,
        pb::ReferenceRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/form", get(form))
        .route("/assessments", post(evaluate))
        .route("/reference/:section", get(reference))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState::default())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/form",
    responses(
        (status = 200, description = "Form questions in order", body = pb::FormRes)
    )
)]
/// List the questions of the calculator form
#[axum::debug_handler]
async fn form(State(state): State<AppState>) -> Json<pb::FormRes> {
    Json(convert::form_res(state.criteria_service.questions()))
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = pb::EvaluateReq,
    responses(
        (status = 200, description = "Evaluation result", body = pb::EvaluateRes),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Unprocessable request body")
    )
)]
/// Evaluate an assessment against the SIRS criteria
///
/// Omitted answers count as "No". Every combination of answers is valid and produces exactly
/// one outcome, so this endpoint never fails once the body has been parsed.
#[axum::debug_handler]
async fn evaluate(
    State(state): State<AppState>,
    Json(req): Json<pb::EvaluateReq>,
) -> Json<pb::EvaluateRes> {
    let assessment = Assessment::from(req);
    Json(state.criteria_service.evaluate(&assessment).into())
}

#[utoipa::path(
    get,
    path = "/reference/{section}",
    params(
        ("section" = String, Path, description = "instructions, next-steps, evidence, creator-insights or credits")
    ),
    responses(
        (status = 200, description = "Reference text", body = pb::ReferenceRes),
        (status = 404, description = "Unknown reference section")
    )
)]
/// Fetch a block of reference text
///
/// # Errors
/// Returns `404 Not Found` if the section name is not recognised.
#[axum::debug_handler]
async fn reference(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<pb::ReferenceRes>, (StatusCode, &'static str)> {
    match state.criteria_service.reference(&section) {
        Ok(section) => Ok(Json(section.into())),
        Err(e) => {
            tracing::error!("Reference lookup error: {:?}", e);
            Err((StatusCode::NOT_FOUND, "Unknown reference section"))
        }
    }
}
