pub mod dashboard;
pub mod employee;
pub mod field;
pub mod status;

pub use dashboard::Dashboard;
pub use employee::{Cell, Employee};
pub use field::Field;
pub use status::Status;
