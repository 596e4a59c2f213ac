use serde::{Deserialize, Serialize};

/// Error body sent by the remote authority alongside non-success statuses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable reason, e.g. `Unauthenticated.`
    pub message: String,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unauthenticated_body() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message":"Unauthenticated."}"#).unwrap();
        assert_eq!(body.to_string(), "Unauthenticated.");
    }

    #[test]
    fn ignores_unknown_fields() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"Invalid","errors":{"email":["required"]}}"#)
                .unwrap();
        assert_eq!(body.message, "Invalid");
    }
}
