pub mod generator;
pub mod repository;
pub mod seed;
pub mod testdata;

pub use generator::{DAY_OFFSETS, GeneratorClock, REASONS, generate_appointments, half_hour_slots};
pub use repository::FixtureRepository;
pub use testdata::{TEST_DATE, TEST_DATE_BOOKINGS, test_repository};
