//! Schema-level tests against the fixed test repository.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::json;

use vetmock_fixtures::{TEST_DATE, TEST_DATE_BOOKINGS, test_repository};
use vetmock_graphql::{VetSchema, build_schema};

fn schema() -> VetSchema {
    build_schema(Arc::new(test_repository().expect("test repository")))
}

async fn execute(query: &str, variables: serde_json::Value) -> async_graphql::Response {
    schema()
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

const GET_APPOINTMENTS: &str = "
    query GetAppointments($date: String!, $vetId: String) {
        appointments(date: $date, vetId: $vetId) {
            id
            date
            time
            petName
            vetId
            status
        }
    }
";

#[tokio::test]
async fn clients_query_returns_the_full_set() {
    let response = execute(
        "query GetClients { clients { id name petIds } }",
        json!({}),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    let clients = data["clients"].as_array().expect("clients array");
    assert_eq!(clients.len(), 10);
    assert_eq!(clients[0]["petIds"], json!(["p1", "p2"]));
}

#[tokio::test]
async fn pets_query_exposes_medical_history() {
    let response = execute(
        "query GetPets { pets { id name age ownerName medicalHistory { date description vet } } }",
        json!({}),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    let pets = data["pets"].as_array().expect("pets array");
    assert_eq!(pets.len(), 12);
    let max = &pets[0];
    assert_eq!(max["name"], "Max");
    assert_eq!(max["medicalHistory"][0]["date"], "2024-08-15");
}

#[tokio::test]
async fn vets_query_returns_the_full_set() {
    let response = execute("query GetVets { vets { id name specialty } }", json!({})).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    assert_eq!(data["vets"].as_array().expect("vets array").len(), 4);
}

#[tokio::test]
async fn appointments_filter_by_date() {
    let response = execute(GET_APPOINTMENTS, json!({ "date": TEST_DATE })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    let appointments = data["appointments"].as_array().expect("appointments array");
    assert_eq!(appointments.len(), TEST_DATE_BOOKINGS);
    assert!(
        appointments
            .iter()
            .all(|appointment| appointment["date"] == TEST_DATE)
    );
}

#[tokio::test]
async fn appointments_intersect_date_and_vet() {
    let response = execute(GET_APPOINTMENTS, json!({ "date": TEST_DATE, "vetId": "v1" })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    let appointments = data["appointments"].as_array().expect("appointments array");
    assert_eq!(appointments.len(), 4);
    assert!(
        appointments
            .iter()
            .all(|appointment| appointment["date"] == TEST_DATE && appointment["vetId"] == "v1")
    );
}

#[tokio::test]
async fn appointments_are_sorted_by_time() {
    let response = execute(GET_APPOINTMENTS, json!({ "date": TEST_DATE })).await;
    let data = response.data.into_json().expect("json data");
    let times: Vec<String> = data["appointments"]
        .as_array()
        .expect("appointments array")
        .iter()
        .map(|appointment| {
            appointment["time"]
                .as_str()
                .expect("time string")
                .to_string()
        })
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[tokio::test]
async fn malformed_date_yields_an_error_entry() {
    let response = execute(GET_APPOINTMENTS, json!({ "date": "not-a-date" })).await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("not-a-date"));
}

#[tokio::test]
async fn unknown_query_yields_an_error_entry() {
    let response = execute("query Bogus { bogus { id } }", json!({})).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn empty_vet_filter_means_no_filter() {
    let response = execute(GET_APPOINTMENTS, json!({ "date": TEST_DATE, "vetId": "" })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().expect("json data");
    assert_eq!(
        data["appointments"].as_array().expect("appointments array").len(),
        TEST_DATE_BOOKINGS
    );
}
