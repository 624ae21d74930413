pub mod cors;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod startup;

pub use startup::{build_app, run};
