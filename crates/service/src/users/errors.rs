use thiserror::Error;

/// Business errors for user workflows
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Name and email are required")]
    Validation(String),
    #[error("User not found")]
    NotFound,
    #[error("Failed to delete user")]
    Consistency(String),
}

impl UserError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            UserError::Validation(_) => 1001,
            UserError::NotFound => 1003,
            UserError::Consistency(_) => 1500,
        }
    }

    /// Internal detail for logs; never sent to clients.
    pub fn detail(&self) -> Option<&str> {
        match self {
            UserError::Validation(d) | UserError::Consistency(d) => Some(d),
            UserError::NotFound => None,
        }
    }
}
