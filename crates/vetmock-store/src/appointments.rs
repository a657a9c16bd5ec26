//! The appointments slice: the one slice whose cache is keyed by a request
//! parameter.
//!
//! A load is needed whenever the asked-for day differs from what the slice
//! last requested (while loading or after a failure) or from what it holds
//! (after a success). Payloads are re-sorted by time on arrival, and the
//! same token rule as [`ResourceSlice`](crate::slice::ResourceSlice) drops
//! out-of-order resolutions.

use chrono::NaiveDate;

use vetmock_model::Appointment;

use crate::slice::{LoadPhase, LoadToken};

#[derive(Debug, Clone, Default)]
pub struct AppointmentsSlice {
    items: Vec<Appointment>,
    phase: LoadPhase,
    error: Option<String>,
    current_date: Option<NaiveDate>,
    requested_date: Option<NaiveDate>,
    seq: u64,
    in_flight: Option<u64>,
}

impl AppointmentsSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Appointment] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The day the cached items belong to.
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    /// Whether a consumer asking for `date` should start a load.
    pub fn needs_load(&self, date: NaiveDate) -> bool {
        match self.phase {
            LoadPhase::Idle => true,
            LoadPhase::Loading | LoadPhase::Failed => self.requested_date != Some(date),
            LoadPhase::Succeeded => self.current_date != Some(date),
        }
    }

    pub fn begin(&mut self, date: NaiveDate) -> LoadToken {
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.requested_date = Some(date);
        self.phase = LoadPhase::Loading;
        self.error = None;
        LoadToken::new(self.seq)
    }

    /// Apply a successful payload for the latest request; stale tokens are
    /// discarded. Items are sorted by time on the way in.
    pub fn resolve(&mut self, token: LoadToken, mut items: Vec<Appointment>) -> bool {
        if self.in_flight != Some(token.seq()) {
            return false;
        }
        items.sort_by_key(|appointment| appointment.time);
        self.in_flight = None;
        self.phase = LoadPhase::Succeeded;
        self.current_date = self.requested_date;
        self.items = items;
        self.error = None;
        true
    }

    /// Record a failure for the latest request; the previously cached day
    /// stays rendered.
    pub fn reject(&mut self, token: LoadToken, message: impl Into<String>) -> bool {
        if self.in_flight != Some(token.seq()) {
            return false;
        }
        self.in_flight = None;
        self.phase = LoadPhase::Failed;
        self.error = Some(message.into());
        true
    }

    /// Back to `idle` with nothing cached. Available to consumers, not part
    /// of the default flow.
    pub fn reset(&mut self) {
        self.items.clear();
        self.phase = LoadPhase::Idle;
        self.error = None;
        self.current_date = None;
        self.requested_date = None;
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetmock_model::{
        AppointmentId, AppointmentStatus, ClientId, PetId, VetId, parse_date,
    };

    fn appointment(id: &str, time: &str) -> Appointment {
        Appointment {
            id: AppointmentId::new(id).expect("valid id"),
            date: parse_date("2025-12-18").expect("valid date"),
            time: time.parse().expect("valid time"),
            pet_id: PetId::new("p1").expect("valid id"),
            pet_name: "Max".to_string(),
            owner_id: ClientId::new("c1").expect("valid id"),
            owner_name: "María González".to_string(),
            vet_id: VetId::new("v1").expect("valid id"),
            vet_name: "Dr. Alejandro Muñoz".to_string(),
            reason: "Control general".to_string(),
            status: AppointmentStatus::Pending,
        }
    }

    #[test]
    fn needs_load_tracks_the_cached_date() {
        let mut slice = AppointmentsSlice::new();
        let day_one = parse_date("2025-12-18").expect("valid date");
        let day_two = parse_date("2025-12-19").expect("valid date");

        assert!(slice.needs_load(day_one));
        let token = slice.begin(day_one);
        // Same date while in flight: no second load.
        assert!(!slice.needs_load(day_one));
        // A different date does need one.
        assert!(slice.needs_load(day_two));

        assert!(slice.resolve(token, vec![appointment("a1", "08:00")]));
        assert_eq!(slice.current_date(), Some(day_one));
        assert!(!slice.needs_load(day_one));
        assert!(slice.needs_load(day_two));
    }

    #[test]
    fn resolve_sorts_items_by_time() {
        let mut slice = AppointmentsSlice::new();
        let token = slice.begin(parse_date("2025-12-18").expect("valid date"));
        slice.resolve(
            token,
            vec![
                appointment("a2", "14:30"),
                appointment("a1", "08:00"),
                appointment("a3", "16:00"),
            ],
        );
        let times: Vec<String> = slice.items().iter().map(|a| a.time.to_string()).collect();
        assert_eq!(times, ["08:00", "14:30", "16:00"]);
    }

    #[test]
    fn stale_response_cannot_overwrite_a_newer_one() {
        let mut slice = AppointmentsSlice::new();
        let day_one = parse_date("2025-12-18").expect("valid date");
        let day_two = parse_date("2025-12-19").expect("valid date");

        let stale = slice.begin(day_one);
        let fresh = slice.begin(day_two);
        assert!(slice.resolve(fresh, vec![appointment("a2", "09:00")]));
        // The day-one response arrives late and is dropped.
        assert!(!slice.resolve(stale, vec![appointment("a1", "08:00")]));
        assert_eq!(slice.current_date(), Some(day_two));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.items()[0].id.as_str(), "a2");
    }

    #[test]
    fn failure_keeps_the_previous_day_cached() {
        let mut slice = AppointmentsSlice::new();
        let day_one = parse_date("2025-12-18").expect("valid date");
        let day_two = parse_date("2025-12-19").expect("valid date");

        let token = slice.begin(day_one);
        slice.resolve(token, vec![appointment("a1", "08:00")]);
        let token = slice.begin(day_two);
        assert!(slice.reject(token, "Error fetching appointments"));

        assert_eq!(slice.phase(), LoadPhase::Failed);
        assert_eq!(slice.error(), Some("Error fetching appointments"));
        assert_eq!(slice.current_date(), Some(day_one));
        assert_eq!(slice.items().len(), 1);
        // The failed day is not retried until the parameters change.
        assert!(!slice.needs_load(day_two));
        assert!(slice.needs_load(day_one));
    }

    #[test]
    fn reset_clears_everything() {
        let mut slice = AppointmentsSlice::new();
        let day = parse_date("2025-12-18").expect("valid date");
        let token = slice.begin(day);
        slice.resolve(token, vec![appointment("a1", "08:00")]);
        slice.reset();
        assert_eq!(slice.phase(), LoadPhase::Idle);
        assert!(slice.items().is_empty());
        assert_eq!(slice.current_date(), None);
        assert!(slice.needs_load(day));
    }
}
