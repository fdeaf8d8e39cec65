pub mod config;
pub mod logic;
pub mod store;
pub mod styles;

pub use logic::DashboardLogic;
pub use store::{FieldUpdate, Store};
