pub mod datetime;
pub mod entities;
pub mod error;
pub mod ids;
pub mod status;

pub use datetime::{DATE_FORMAT, TimeSlot, format_date, parse_date};
pub use entities::{Appointment, Client, MedicalRecord, Pet, Vet};
pub use error::{ModelError, Result};
pub use ids::{AppointmentId, ClientId, PetId, VetId};
pub use status::AppointmentStatus;
