//! Session-related types.
//!
//! Types stored in the session for authentication state. The login flow that
//! writes them lives outside this site; here they are only read and copied.

use serde::{Deserialize, Serialize};

/// Session-stored user identity.
///
/// An opaque snapshot of the current principal. The fields are owned by the
/// authentication collaborator; this site copies the value around without
/// interpreting it beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable identifier assigned by the auth system.
    pub id: String,
    /// Display name, if the auth system provided one.
    #[serde(default)]
    pub name: Option<String>,
    /// Account kind (e.g. candidate, admin), if provided.
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_tolerates_missing_optional_fields() {
        let identity: UserIdentity = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.name, None);
        assert_eq!(identity.user_type, None);
    }
}
