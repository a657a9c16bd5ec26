//! A fully deterministic repository for test suites across the workspace.
//!
//! Unlike the demo repository, nothing here depends on a seed or a clock:
//! the schedule is pinned to 2025-12-18 (ten bookings) plus two on the
//! following day, so date-filter assertions have something to exclude.

use vetmock_model::{
    Appointment, AppointmentId, AppointmentStatus, ClientId, PetId, Result, VetId, parse_date,
};

use crate::repository::FixtureRepository;
use crate::seed;

/// The day the fixed schedule is pinned to.
pub const TEST_DATE: &str = "2025-12-18";

/// Bookings seeded on [`TEST_DATE`].
pub const TEST_DATE_BOOKINGS: usize = 10;

struct Booking {
    id: &'static str,
    date: &'static str,
    time: &'static str,
    pet: (&'static str, &'static str),
    owner: (&'static str, &'static str),
    vet: (&'static str, &'static str),
    reason: &'static str,
    status: AppointmentStatus,
}

const MUNOZ: (&str, &str) = ("v1", "Dr. Alejandro Muñoz");
const SOTO: (&str, &str) = ("v2", "Dra. Carolina Soto");
const VARGAS: (&str, &str) = ("v3", "Dra. Patricia Vargas");

const BOOKINGS: [Booking; 12] = [
    Booking { id: "a1", date: TEST_DATE, time: "08:00", pet: ("p1", "Max"), owner: ("c1", "María González"), vet: MUNOZ, reason: "Control general", status: AppointmentStatus::Completed },
    Booking { id: "a2", date: TEST_DATE, time: "08:30", pet: ("p2", "Luna"), owner: ("c1", "María González"), vet: SOTO, reason: "Vacunación", status: AppointmentStatus::Completed },
    Booking { id: "a3", date: TEST_DATE, time: "09:00", pet: ("p3", "Rocky"), owner: ("c2", "Carlos Rodríguez"), vet: MUNOZ, reason: "Limpieza dental", status: AppointmentStatus::Completed },
    Booking { id: "a4", date: TEST_DATE, time: "09:30", pet: ("p4", "Mia"), owner: ("c3", "Ana Martínez"), vet: VARGAS, reason: "Consulta dermatológica", status: AppointmentStatus::InProgress },
    Booking { id: "a5", date: TEST_DATE, time: "10:00", pet: ("p5", "Simba"), owner: ("c3", "Ana Martínez"), vet: SOTO, reason: "Control de peso", status: AppointmentStatus::Pending },
    Booking { id: "a6", date: TEST_DATE, time: "10:30", pet: ("p6", "Toby"), owner: ("c4", "Pedro Silva"), vet: MUNOZ, reason: "Revisión post-operatoria", status: AppointmentStatus::Pending },
    Booking { id: "a7", date: TEST_DATE, time: "11:00", pet: ("p7", "Coco"), owner: ("c5", "Laura Fernández"), vet: VARGAS, reason: "Control general", status: AppointmentStatus::Pending },
    Booking { id: "a8", date: TEST_DATE, time: "14:00", pet: ("p8", "Bruno"), owner: ("c6", "Diego Morales"), vet: SOTO, reason: "Desparasitación", status: AppointmentStatus::Pending },
    Booking { id: "a9", date: TEST_DATE, time: "15:30", pet: ("p1", "Max"), owner: ("c1", "María González"), vet: MUNOZ, reason: "Consulta urgente", status: AppointmentStatus::Pending },
    Booking { id: "a10", date: TEST_DATE, time: "16:00", pet: ("p3", "Rocky"), owner: ("c2", "Carlos Rodríguez"), vet: SOTO, reason: "Vacunación", status: AppointmentStatus::Pending },
    Booking { id: "a11", date: "2025-12-19", time: "09:00", pet: ("p5", "Simba"), owner: ("c3", "Ana Martínez"), vet: MUNOZ, reason: "Control general", status: AppointmentStatus::Pending },
    Booking { id: "a12", date: "2025-12-19", time: "10:30", pet: ("p9", "Nala"), owner: ("c6", "Diego Morales"), vet: VARGAS, reason: "Control de peso", status: AppointmentStatus::Pending },
];

/// The fixed repository: the seed clients/pets/vets plus the pinned schedule.
pub fn test_repository() -> Result<FixtureRepository> {
    let appointments = BOOKINGS
        .iter()
        .map(|booking| {
            Ok(Appointment {
                id: AppointmentId::new(booking.id)?,
                date: parse_date(booking.date)?,
                time: booking.time.parse()?,
                pet_id: PetId::new(booking.pet.0)?,
                pet_name: booking.pet.1.to_string(),
                owner_id: ClientId::new(booking.owner.0)?,
                owner_name: booking.owner.1.to_string(),
                vet_id: VetId::new(booking.vet.0)?,
                vet_name: booking.vet.1.to_string(),
                reason: booking.reason.to_string(),
                status: booking.status,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FixtureRepository::new(
        seed::clients()?,
        seed::pets()?,
        seed::vets()?,
        appointments,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_day_has_exactly_ten_bookings() {
        let repo = test_repository().expect("test repository");
        let date = parse_date(TEST_DATE).expect("valid date");
        assert_eq!(repo.appointments_on(date).len(), TEST_DATE_BOOKINGS);
        assert_eq!(repo.appointments().len(), 12);
    }

    #[test]
    fn pinned_schedule_is_sorted_by_time() {
        let repo = test_repository().expect("test repository");
        let date = parse_date(TEST_DATE).expect("valid date");
        let times: Vec<_> = repo
            .appointments_on(date)
            .iter()
            .map(|appointment| appointment.time)
            .collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn vet_v1_has_four_bookings_on_the_pinned_day() {
        let repo = test_repository().expect("test repository");
        let date = parse_date(TEST_DATE).expect("valid date");
        let vet = VetId::new("v1").expect("valid id");
        assert_eq!(repo.appointments_for(date, Some(&vet)).len(), 4);
    }
}
