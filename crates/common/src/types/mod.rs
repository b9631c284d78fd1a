use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of the root endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Welcome {
    pub message: String,
}

impl Welcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
