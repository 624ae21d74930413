//! Users module: three-layer architecture (domain, repository, service).
//!
//! The HTTP layer only talks to [`UserService`]; the collection itself lives
//! behind a [`repository::UserRepository`] implementation.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::{CreateUserInput, UpdateUserInput, User};
pub use errors::UserError;
pub use service::UserService;
