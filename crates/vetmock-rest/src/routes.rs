//! Route table and handlers.
//!
//! Four read-only resource endpoints plus a health probe. The repository is
//! shared state; every handler is a linear scan over it. Query parameters
//! are validated here, at the edge, so downstream code only ever sees typed
//! values.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use vetmock_fixtures::FixtureRepository;
use vetmock_model::{Appointment, Client, Pet, Vet, VetId, parse_date};

use crate::error::ApiError;

pub fn router(repo: Arc<FixtureRepository>) -> Router {
    Router::new()
        .route("/api/clients", get(list_clients))
        .route("/api/pets", get(list_pets))
        .route("/api/vets", get(list_vets))
        .route("/api/appointments", get(list_appointments))
        .route("/api/health", get(health))
        .with_state(repo)
}

async fn list_clients(State(repo): State<Arc<FixtureRepository>>) -> Json<Vec<Client>> {
    Json(repo.clients().to_vec())
}

async fn list_pets(State(repo): State<Arc<FixtureRepository>>) -> Json<Vec<Pet>> {
    Json(repo.pets().to_vec())
}

async fn list_vets(State(repo): State<Arc<FixtureRepository>>) -> Json<Vec<Vet>> {
    Json(repo.vets().to_vec())
}

#[derive(Debug, Deserialize)]
struct AppointmentsQuery {
    date: Option<String>,
    #[serde(rename = "vetId")]
    vet_id: Option<String>,
}

async fn list_appointments(
    State(repo): State<Arc<FixtureRepository>>,
    Query(params): Query<AppointmentsQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let raw_date = params.date.ok_or(ApiError::MissingDate)?;
    let date = parse_date(&raw_date).map_err(|_| ApiError::InvalidDate(raw_date))?;
    // An empty vetId means "no filter", matching the browser mock layer.
    let vet = params
        .vet_id
        .filter(|value| !value.trim().is_empty())
        .map(|value| VetId::new(value.clone()).map_err(|_| ApiError::InvalidVetId(value)))
        .transpose()?;
    tracing::debug!(date = %date, vet = vet.as_ref().map(VetId::as_str), "appointments query");
    Ok(Json(repo.appointments_for(date, vet.as_ref())))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "REST API",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
