pub mod app;
pub mod campus;

pub use app::{bearer, make_test_app, send};
pub use campus::{Campus, date, seed_campus, unassigned_student};
