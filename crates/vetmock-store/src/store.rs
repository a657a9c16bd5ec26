//! Load orchestration over the four slices.
//!
//! Each `load_*` call is a complete dispatch: it checks whether the slice
//! needs a load, starts one, and settles it from the adapter's outcome. The
//! gate runs before the request, so a view re-rendering against cached data
//! never issues a second fetch.

use chrono::NaiveDate;

use vetmock_client::VetApi;
use vetmock_model::{Client, Pet, Vet, VetId};

use crate::appointments::AppointmentsSlice;
use crate::slice::ResourceSlice;

#[derive(Debug, Default)]
pub struct VetStore {
    pub clients: ResourceSlice<Client>,
    pub pets: ResourceSlice<Pet>,
    pub vets: ResourceSlice<Vet>,
    pub appointments: AppointmentsSlice,
}

impl VetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_clients<A>(&mut self, api: &A)
    where
        A: VetApi + ?Sized,
    {
        if !self.clients.should_load() {
            return;
        }
        let token = self.clients.begin();
        match api.fetch_clients().await {
            Ok(items) => {
                self.clients.resolve(token, items);
            }
            Err(error) => {
                tracing::debug!(%error, "clients load failed");
                self.clients.reject(token, error.to_string());
            }
        }
    }

    pub async fn load_pets<A>(&mut self, api: &A)
    where
        A: VetApi + ?Sized,
    {
        if !self.pets.should_load() {
            return;
        }
        let token = self.pets.begin();
        match api.fetch_pets().await {
            Ok(items) => {
                self.pets.resolve(token, items);
            }
            Err(error) => {
                tracing::debug!(%error, "pets load failed");
                self.pets.reject(token, error.to_string());
            }
        }
    }

    pub async fn load_vets<A>(&mut self, api: &A)
    where
        A: VetApi + ?Sized,
    {
        if !self.vets.should_load() {
            return;
        }
        let token = self.vets.begin();
        match api.fetch_vets().await {
            Ok(items) => {
                self.vets.resolve(token, items);
            }
            Err(error) => {
                tracing::debug!(%error, "vets load failed");
                self.vets.reject(token, error.to_string());
            }
        }
    }

    /// Load the schedule for `date`, optionally narrowed to one vet. A date
    /// already cached (or already being fetched) is a no-op.
    pub async fn load_appointments<A>(&mut self, api: &A, date: NaiveDate, vet: Option<&VetId>)
    where
        A: VetApi + ?Sized,
    {
        if !self.appointments.needs_load(date) {
            return;
        }
        let token = self.appointments.begin(date);
        match api.fetch_appointments(date, vet).await {
            Ok(items) => {
                self.appointments.resolve(token, items);
            }
            Err(error) => {
                tracing::debug!(%error, %date, "appointments load failed");
                self.appointments.reject(token, error.to_string());
            }
        }
    }
}
