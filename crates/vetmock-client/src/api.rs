use async_trait::async_trait;
use chrono::NaiveDate;

use vetmock_model::{Appointment, Client, Pet, Vet, VetId};

use crate::error::AdapterError;

/// The adapter contract both transports implement: fetch-all for the three
/// reference resources, fetch-by-date (with an optional vet filter) for
/// appointments. One request per call; no retry, no timeout, no caching.
#[async_trait]
pub trait VetApi: Send + Sync {
    async fn fetch_clients(&self) -> Result<Vec<Client>, AdapterError>;

    async fn fetch_pets(&self) -> Result<Vec<Pet>, AdapterError>;

    async fn fetch_vets(&self) -> Result<Vec<Vet>, AdapterError>;

    async fn fetch_appointments(
        &self,
        date: NaiveDate,
        vet: Option<&VetId>,
    ) -> Result<Vec<Appointment>, AdapterError>;
}
