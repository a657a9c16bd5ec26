//! The fixture-backed store behind both facades.
//!
//! One repository is built at startup and handed to request handlers by
//! reference; nothing here is global and nothing mutates after construction.
//! Queries are unindexed linear scans with exact-equality filters, which is
//! all the demo dataset needs.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vetmock_model::{Appointment, Client, Pet, Result, Vet, VetId};

use crate::generator::{GeneratorClock, generate_appointments};
use crate::seed;

#[derive(Debug, Clone)]
pub struct FixtureRepository {
    clients: Vec<Client>,
    pets: Vec<Pet>,
    vets: Vec<Vet>,
    appointments: Vec<Appointment>,
}

impl FixtureRepository {
    pub fn new(
        clients: Vec<Client>,
        pets: Vec<Pet>,
        vets: Vec<Vet>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            clients,
            pets,
            vets,
            appointments,
        }
    }

    /// Build the demo repository: the seed dataset plus a schedule generated
    /// around `today` from the given seed.
    pub fn demo(seed: u64, today: NaiveDate, current_hour: u32) -> Result<Self> {
        let clients = seed::clients()?;
        let pets = seed::pets()?;
        let vets = seed::vets()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clock = GeneratorClock {
            today,
            current_hour,
        };
        let appointments = generate_appointments(&mut rng, clock, &pets, &vets)?;
        Ok(Self::new(clients, pets, vets, appointments))
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn vets(&self) -> &[Vet] {
        &self.vets
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// All appointments on the given day, in schedule order.
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments_for(date, None)
    }

    /// Appointments on the given day, optionally narrowed to one vet. The
    /// result is the intersection of both filters.
    pub fn appointments_for(&self, date: NaiveDate, vet: Option<&VetId>) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.date == date)
            .filter(|appointment| vet.is_none_or(|vet| &appointment.vet_id == vet))
            .cloned()
            .collect()
    }
}
