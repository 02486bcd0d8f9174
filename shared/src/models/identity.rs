//! User Identity Model

use serde::{Deserialize, Serialize};

/// Signed-in staff identity and authorization flags
///
/// `is_auth` is true exactly while an identity is set; the signed-out
/// default has every flag false and every field empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
    pub is_superuser: bool,
    pub is_auth: bool,
}

/// Sign-in payload
///
/// Authorization flags are coerced: anything but a literal boolean
/// `true` (strings, numbers, null) deserializes to `false`. A legacy
/// `role` string is detected for operator visibility but never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityInput {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_superuser: bool,
    /// Legacy role string; triggers a warning, carries no authority
    #[serde(default)]
    pub role: Option<String>,
}

/// Accept any JSON value where a flag is expected; only a literal
/// `true` counts.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_boolean_flag_defaults_to_false() {
        let input: IdentityInput = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "name": "A",
            "is_admin": "yes"
        }))
        .unwrap();
        assert!(!input.is_admin);
        assert!(!input.is_superuser);
    }

    #[test]
    fn test_boolean_true_is_kept() {
        let input: IdentityInput = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "name": "A",
            "is_admin": true,
            "is_superuser": 1
        }))
        .unwrap();
        assert!(input.is_admin);
        assert!(!input.is_superuser);
    }

    #[test]
    fn test_legacy_role_is_detected() {
        let input: IdentityInput = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(input.role.as_deref(), Some("admin"));
        // the role string never grants a flag
        assert!(!input.is_admin);
    }
}
