use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the authenticated user as returned by `GET /api/auth/user`.
///
/// Attributes beyond the identity fields are kept verbatim so a round trip
/// through storage loses nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Server-side identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Login e-mail address.
    pub email: String,

    /// Any other attribute the server sent.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl UserProfile {
    /// Profile with identity fields only.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            attributes: Map::new(),
        }
    }
}
