//! Appointment schedule generation.
//!
//! The schedule brackets an injected `today`: two days of history, the
//! current day, and five days ahead. Randomness comes from a caller-supplied
//! `Rng`, so a seeded run is reproducible end to end; the clock is likewise
//! injected rather than read here.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::collections::HashSet;

use vetmock_model::{
    Appointment, AppointmentId, AppointmentStatus, Pet, Result, TimeSlot, Vet,
};

/// Day offsets covered by the generated schedule, inclusive.
pub const DAY_OFFSETS: std::ops::RangeInclusive<i64> = -2..=5;

/// Bookings drawn per day, inclusive.
const PER_DAY: std::ops::RangeInclusive<usize> = 3..=10;

/// Half-hour slots on the clinic day: 08:00 through 17:00 with a lunch gap
/// after 12:00.
const SLOT_PARTS: [(u8, u8); 16] = [
    (8, 0),
    (8, 30),
    (9, 0),
    (9, 30),
    (10, 0),
    (10, 30),
    (11, 0),
    (11, 30),
    (12, 0),
    (14, 0),
    (14, 30),
    (15, 0),
    (15, 30),
    (16, 0),
    (16, 30),
    (17, 0),
];

pub const REASONS: [&str; 8] = [
    "Control general",
    "Vacunación",
    "Revisión post-operatoria",
    "Consulta dermatológica",
    "Desparasitación",
    "Control de peso",
    "Limpieza dental",
    "Consulta urgente",
];

/// The bookable slot list, chronological.
pub fn half_hour_slots() -> Result<Vec<TimeSlot>> {
    SLOT_PARTS
        .iter()
        .map(|&(hour, minute)| TimeSlot::new(hour, minute))
        .collect()
}

/// The injected clock: the day the schedule is centered on and the hour used
/// to grade the current day's slots.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorClock {
    pub today: NaiveDate,
    pub current_hour: u32,
}

/// Generate the full schedule, sorted ascending by (date, time).
///
/// Slots within one day never collide: a drawn slot that is already taken is
/// redrawn until a free one comes up (at most 10 bookings against 16 slots).
/// Empty pet or vet sets yield an empty schedule.
pub fn generate_appointments(
    rng: &mut impl Rng,
    clock: GeneratorClock,
    pets: &[Pet],
    vets: &[Vet],
) -> Result<Vec<Appointment>> {
    if pets.is_empty() || vets.is_empty() {
        return Ok(Vec::new());
    }

    let slots = half_hour_slots()?;
    let mut appointments = Vec::new();

    for day_offset in DAY_OFFSETS {
        let date = clock.today + Duration::days(day_offset);
        let count = rng.random_range(PER_DAY);
        let mut used = HashSet::new();

        for _ in 0..count {
            let slot = loop {
                let candidate = slots[rng.random_range(0..slots.len())];
                if used.insert(candidate) {
                    break candidate;
                }
            };

            let pet = &pets[rng.random_range(0..pets.len())];
            let vet = &vets[rng.random_range(0..vets.len())];
            let reason = REASONS[rng.random_range(0..REASONS.len())];

            appointments.push(Appointment {
                id: AppointmentId::new(format!("a{}", appointments.len() + 1))?,
                date,
                time: slot,
                pet_id: pet.id.clone(),
                pet_name: pet.name.clone(),
                owner_id: pet.owner_id.clone(),
                owner_name: pet.owner_name.clone(),
                vet_id: vet.id.clone(),
                vet_name: vet.name.clone(),
                reason: reason.to_string(),
                status: status_for(day_offset, slot, clock.current_hour),
            });
        }
    }

    appointments.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
    Ok(appointments)
}

/// Past days are done, future days are pending, and the current day is graded
/// against the clock hour.
fn status_for(day_offset: i64, slot: TimeSlot, current_hour: u32) -> AppointmentStatus {
    if day_offset < 0 {
        return AppointmentStatus::Completed;
    }
    if day_offset > 0 {
        return AppointmentStatus::Pending;
    }
    match u32::from(slot.hour()).cmp(&current_hour) {
        std::cmp::Ordering::Less => AppointmentStatus::Completed,
        std::cmp::Ordering::Equal => AppointmentStatus::InProgress,
        std::cmp::Ordering::Greater => AppointmentStatus::Pending,
    }
}
