//! End-to-end adapter tests against in-process facades on ephemeral ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use vetmock_client::{AdapterError, GraphqlApi, RestApi, VetApi};
use vetmock_fixtures::{TEST_DATE, TEST_DATE_BOOKINGS, test_repository};
use vetmock_model::{VetId, parse_date};

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

async fn spawn_rest() -> RestApi {
    let repo = Arc::new(test_repository().expect("test repository"));
    let addr = spawn(vetmock_rest::router(repo)).await;
    RestApi::new(format!("http://{addr}"))
}

async fn spawn_graphql() -> GraphqlApi {
    let repo = Arc::new(test_repository().expect("test repository"));
    let schema = vetmock_graphql::build_schema(repo);
    let addr = spawn(vetmock_graphql::router(schema)).await;
    GraphqlApi::new(format!("http://{addr}/graphql"))
}

#[tokio::test]
async fn rest_adapter_fetches_typed_resources() {
    let api = spawn_rest().await;

    let clients = api.fetch_clients().await.expect("clients");
    assert_eq!(clients.len(), 10);
    assert_eq!(clients[0].id.as_str(), "c1");

    let pets = api.fetch_pets().await.expect("pets");
    assert_eq!(pets.len(), 12);
    assert_eq!(pets[0].owner_name, "María González");

    let vets = api.fetch_vets().await.expect("vets");
    assert_eq!(vets.len(), 4);
}

#[tokio::test]
async fn rest_adapter_filters_appointments() {
    let api = spawn_rest().await;
    let date = parse_date(TEST_DATE).expect("valid date");

    let all = api.fetch_appointments(date, None).await.expect("appointments");
    assert_eq!(all.len(), TEST_DATE_BOOKINGS);
    assert!(all.iter().all(|appointment| appointment.date == date));

    let vet = VetId::new("v1").expect("valid id");
    let narrowed = api
        .fetch_appointments(date, Some(&vet))
        .await
        .expect("filtered appointments");
    assert_eq!(narrowed.len(), 4);
    assert!(narrowed.iter().all(|appointment| appointment.vet_id == vet));
}

#[tokio::test]
async fn rest_adapter_reports_the_resource_on_failure() {
    let addr = spawn(Router::new().route(
        "/api/clients",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let api = RestApi::new(format!("http://{addr}"));

    let error = api.fetch_clients().await.expect_err("should fail");
    assert!(matches!(error, AdapterError::Fetch("clients")));
    assert_eq!(error.to_string(), "Error fetching clients");
}

#[tokio::test]
async fn graphql_adapter_fetches_typed_resources() {
    let api = spawn_graphql().await;

    let pets = api.fetch_pets().await.expect("pets");
    assert_eq!(pets.len(), 12);
    assert_eq!(pets[0].medical_history.len(), 2);

    let clients = api.fetch_clients().await.expect("clients");
    assert_eq!(clients.len(), 10);

    let vets = api.fetch_vets().await.expect("vets");
    assert_eq!(vets.len(), 4);
}

#[tokio::test]
async fn graphql_adapter_intersects_date_and_vet() {
    let api = spawn_graphql().await;
    let date = parse_date(TEST_DATE).expect("valid date");
    let vet = VetId::new("v1").expect("valid id");

    let narrowed = api
        .fetch_appointments(date, Some(&vet))
        .await
        .expect("filtered appointments");
    assert_eq!(narrowed.len(), 4);
    assert!(
        narrowed
            .iter()
            .all(|appointment| appointment.date == date && appointment.vet_id == vet)
    );
}

#[tokio::test]
async fn graphql_adapter_surfaces_the_first_error_message() {
    let addr = spawn(Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({ "errors": [
                { "message": "Unknown query" },
                { "message": "second" },
            ] }))
        }),
    ))
    .await;
    let api = GraphqlApi::new(format!("http://{addr}/graphql"));

    let error = api.fetch_vets().await.expect_err("should fail");
    assert_eq!(error.to_string(), "Unknown query");
}

#[tokio::test]
async fn graphql_adapter_reports_transport_status() {
    let addr = spawn(Router::new().route(
        "/graphql",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let api = GraphqlApi::new(format!("http://{addr}/graphql"));

    let error = api.fetch_clients().await.expect_err("should fail");
    assert_eq!(error.to_string(), "GraphQL request failed: 503");
}
