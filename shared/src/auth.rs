//! Roles and the persisted user profile.

use serde::{Deserialize, Deserializer, Serialize};

/// The three roles the backend hands out. Wire casing is inconsistent
/// ("Admin", "ADMIN"); parsing normalizes to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Creator,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "creator" => Some(Role::Creator),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Creator => "creator",
        }
    }

    /// Roles allowed into the dashboard and the CRUD forms.
    pub fn can_manage_content(&self) -> bool {
        matches!(self, Role::Admin | Role::Creator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {raw}")))
    }
}

/// Denormalized profile blob persisted under the `user` local-storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_normalizes_server_casing() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse(" creator "), Some(Role::Creator));
        assert_eq!(Role::parse("editor"), None);
    }

    #[test]
    fn profile_round_trips_with_lowercase_role() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "_id": "u1", "name": "Lena", "email": "lena@example.com", "role": "Admin"
        }))
        .expect("profile");
        assert_eq!(profile.role, Role::Admin);

        let serialized = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(serialized["role"], "admin");
    }

    #[test]
    fn unknown_role_is_a_deserialization_error() {
        let result: Result<UserProfile, _> = serde_json::from_value(serde_json::json!({
            "id": "u1", "role": "superuser"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn content_management_is_admin_and_creator_only() {
        assert!(Role::Admin.can_manage_content());
        assert!(Role::Creator.can_manage_content());
        assert!(!Role::User.can_manage_content());
    }
}
