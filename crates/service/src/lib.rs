//! Service layer for the user resource.
//! - Keeps validation and id policy out of the HTTP layer.
//! - Storage sits behind the `UserRepository` trait.

pub mod users;
