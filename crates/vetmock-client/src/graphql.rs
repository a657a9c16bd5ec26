//! GraphQL transport adapter.
//!
//! Every fetch posts `{query, variables}` and unwraps the `data` envelope.
//! A non-2xx status fails fast; an `errors` array wins over any partial
//! `data` and surfaces the first message.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use vetmock_model::{Appointment, Client, Pet, Vet, VetId, format_date};

use crate::api::VetApi;
use crate::error::AdapterError;

const GET_CLIENTS: &str = "
    query GetClients {
        clients {
            id
            name
            phone
            email
            address
            petIds
        }
    }
";

const GET_PETS: &str = "
    query GetPets {
        pets {
            id
            name
            species
            breed
            age
            ownerId
            ownerName
            medicalHistory {
                date
                description
                vet
            }
        }
    }
";

const GET_VETS: &str = "
    query GetVets {
        vets {
            id
            name
            specialty
            phone
            email
        }
    }
";

const GET_APPOINTMENTS: &str = "
    query GetAppointments($date: String!, $vetId: String) {
        appointments(date: $date, vetId: $vetId) {
            id
            date
            time
            petId
            petName
            ownerId
            ownerName
            vetId
            vetName
            reason
            status
        }
    }
";

#[derive(Debug, serde::Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Clone)]
pub struct GraphqlApi {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphqlApi {
    /// `endpoint` is the full query URL, e.g. `http://localhost:4001/graphql`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, AdapterError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AdapterError::GraphQlStatus(response.status().as_u16()));
        }
        let body: GraphQlResponse = response.json().await?;
        if let Some(errors) = body.errors {
            let message = errors
                .into_iter()
                .next()
                .map_or_else(|| "GraphQL Error".to_string(), |entry| entry.message);
            return Err(AdapterError::GraphQl(message));
        }
        body.data
            .ok_or_else(|| AdapterError::GraphQl("GraphQL Error".to_string()))
    }

    async fn fetch_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        field: &str,
    ) -> Result<T, AdapterError> {
        let mut data = self.execute(query, variables).await?;
        let value = data
            .get_mut(field)
            .map(serde_json::Value::take)
            .unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl VetApi for GraphqlApi {
    async fn fetch_clients(&self) -> Result<Vec<Client>, AdapterError> {
        self.fetch_field(GET_CLIENTS, json!({}), "clients").await
    }

    async fn fetch_pets(&self) -> Result<Vec<Pet>, AdapterError> {
        self.fetch_field(GET_PETS, json!({}), "pets").await
    }

    async fn fetch_vets(&self) -> Result<Vec<Vet>, AdapterError> {
        self.fetch_field(GET_VETS, json!({}), "vets").await
    }

    async fn fetch_appointments(
        &self,
        date: NaiveDate,
        vet: Option<&VetId>,
    ) -> Result<Vec<Appointment>, AdapterError> {
        let variables = json!({
            "date": format_date(date),
            "vetId": vet.map(VetId::as_str),
        });
        self.fetch_field(GET_APPOINTMENTS, variables, "appointments")
            .await
    }
}
