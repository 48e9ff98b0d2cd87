use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
///
/// `name`, `email`, `password`, `phone`, `flat_number`, `wing` and `floor` are
/// required by the client; the rest are optional extras the backend stores
/// on the resident profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub flat_number: String,
    pub wing: String,
    pub floor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_details: Option<String>,
}

/// Successful auth payload (register, login and verify all return this)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthData {
    pub user: UserProfile,
    pub token: String,
}

/// Resident profile as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub flat_number: String,
    #[serde(default)]
    pub wing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_details: Option<String>,
}

impl UserProfile {
    /// Flat address as shown on the dashboard, e.g. `A-101, Floor 1`
    pub fn flat_label(&self) -> String {
        let flat = if self.wing.is_empty() || self.flat_number.starts_with(&self.wing) {
            self.flat_number.clone()
        } else {
            format!("{}-{}", self.wing, self.flat_number)
        };

        match self.floor.as_deref() {
            Some(floor) if !floor.is_empty() => format!("{}, Floor {}", flat, floor),
            _ => flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request = RegisterRequest {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            phone: "9876543210".to_string(),
            flat_number: "101".to_string(),
            wing: "A".to_string(),
            floor: "1".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).expect("request should serialize in test");
        assert_eq!(json["flatNumber"], "101");
        assert!(json.get("emergencyContact").is_none());
    }

    #[test]
    fn test_user_profile_tolerates_sparse_payload() {
        let body = r#"{"_id":"u1","name":"Asha","email":"asha@example.com","isEmailVerified":true}"#;
        let user: UserProfile = serde_json::from_str(body).expect("profile should parse in test");

        assert_eq!(user.id, "u1");
        assert!(user.is_email_verified);
        assert!(user.phone.is_none());
        assert_eq!(user.flat_number, "");
    }

    #[test]
    fn test_flat_label() {
        let mut user = UserProfile {
            flat_number: "101".to_string(),
            wing: "A".to_string(),
            floor: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(user.flat_label(), "A-101, Floor 1");

        user.flat_number = "A-101".to_string();
        user.floor = None;
        assert_eq!(user.flat_label(), "A-101");
    }
}
