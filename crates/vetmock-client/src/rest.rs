//! REST transport adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use vetmock_model::{Appointment, Client, Pet, Vet, VetId, format_date};

use crate::api::VetApi;
use crate::error::AdapterError;

#[derive(Debug, Clone)]
pub struct RestApi {
    base_url: String,
    http: reqwest::Client,
}

impl RestApi {
    /// `base_url` is the server root, e.g. `http://localhost:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, AdapterError> {
        let url = format!("{}/api/{resource}", self.base_url);
        let response = self.http.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(AdapterError::Fetch(resource));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl VetApi for RestApi {
    async fn fetch_clients(&self) -> Result<Vec<Client>, AdapterError> {
        self.fetch_list("clients", &[]).await
    }

    async fn fetch_pets(&self) -> Result<Vec<Pet>, AdapterError> {
        self.fetch_list("pets", &[]).await
    }

    async fn fetch_vets(&self) -> Result<Vec<Vet>, AdapterError> {
        self.fetch_list("vets", &[]).await
    }

    async fn fetch_appointments(
        &self,
        date: NaiveDate,
        vet: Option<&VetId>,
    ) -> Result<Vec<Appointment>, AdapterError> {
        let mut query = vec![("date", format_date(date))];
        if let Some(vet) = vet {
            query.push(("vetId", vet.as_str().to_string()));
        }
        self.fetch_list("appointments", &query).await
    }
}
