//! Account wire models

use serde::{Deserialize, Serialize};

/// Account gender, serialized as the backend's integer codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(into = "u8", from = "u8")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> u8 {
        match gender {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

impl From<u8> for Gender {
    /// Unrecognized codes fall back to `Unknown`, matching the backend.
    fn from(code: u8) -> Gender {
        match code {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Unknown => write!(f, "unknown"),
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Account resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account id
    pub id: u64,

    /// Username
    pub username: String,

    /// Gender code
    #[serde(default)]
    pub gender: Gender,

    /// Email address
    pub email: String,

    /// Telephone number
    pub telephone: String,

    /// Avatar URL (optional)
    #[serde(default)]
    pub avatar: Option<String>,

    /// Account role
    pub role: String,

    /// Birthday, yyyy-MM-dd (optional)
    #[serde(default)]
    pub birthday: Option<String>,

    /// Age derived from birthday (optional)
    #[serde(default)]
    pub age: Option<u32>,

    /// Creation timestamp (as string from API)
    pub create_time: String,

    /// Last update timestamp (as string from API)
    pub update_time: String,
}

/// Self-service account update; every field optional
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// yyyy-MM-dd
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl UpdateAccountRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.gender.is_none()
            && self.telephone.is_none()
            && self.birthday.is_none()
    }
}

/// Admin account creation; the backend assigns the default password and role
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub telephone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Gender::Unknown).unwrap(), "0");
    }

    #[test]
    fn test_gender_unknown_code_falls_back() {
        let gender: Gender = serde_json::from_str("9").unwrap();
        assert_eq!(gender, Gender::Unknown);
    }

    #[test]
    fn test_account_deserializes_wire_shape() {
        let json = r#"{
            "id": 1,
            "username": "alice",
            "gender": 2,
            "email": "alice@example.com",
            "telephone": "13800000000",
            "avatar": null,
            "role": "admin",
            "birthday": "1999-04-01",
            "age": 27,
            "createTime": "2026-01-01 09:30:00",
            "updateTime": "2026-02-01 10:00:00"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.gender, Gender::Female);
        assert_eq!(account.birthday.as_deref(), Some("1999-04-01"));
        assert!(account.avatar.is_none());
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let request = UpdateAccountRequest {
            telephone: Some("13900000000".to_string()),
            ..Default::default()
        };

        let encoded = serde_json::to_value(&request).unwrap();
        let obj = encoded.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("telephone"));
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateAccountRequest::default().is_empty());
        let request = UpdateAccountRequest {
            gender: Some(Gender::Male),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }
}
