pub mod appointments;
pub mod slice;
pub mod store;

pub use appointments::AppointmentsSlice;
pub use slice::{LoadPhase, LoadToken, ResourceSlice};
pub use store::VetStore;
