use serde::{Deserialize, Serialize};

/// Static descriptor returned by `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Welcome {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

impl Welcome {
    pub const fn current() -> Self {
        Self {
            message: "Welcome to the COMP308 DevOps Project API",
            version: "1.0.0",
            status: "running",
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub environment: String,
    pub version: String,
    pub timestamp: String,
}

/// Body of every error response: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
