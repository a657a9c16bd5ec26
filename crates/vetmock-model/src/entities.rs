//! Record types served by the mock facades.
//!
//! Field names mirror the JSON wire format of the demo API (camelCase, with
//! denormalized display names alongside every foreign identifier). The
//! dataset is read-only: records are built once at repository construction
//! and never mutated. Referential integrity between records is deliberately
//! not enforced at runtime; a dangling identifier simply finds no match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datetime::TimeSlot;
use crate::ids::{AppointmentId, ClientId, PetId, VetId};
use crate::status::AppointmentStatus;

/// A clinic client (pet owner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Owned pets, in registration order.
    pub pet_ids: Vec<PetId>,
}

/// One entry in a pet's medical history.
///
/// The attending vet is a display name only, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub date: NaiveDate,
    pub description: String,
    pub vet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub owner_id: ClientId,
    pub owner_name: String,
    pub medical_history: Vec<MedicalRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vet {
    pub id: VetId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub pet_id: PetId,
    pub pet_name: String,
    pub owner_id: ClientId,
    pub owner_name: String,
    pub vet_id: VetId,
    pub vet_name: String,
    pub reason: String,
    pub status: AppointmentStatus,
}
