//! the user data model.

use crate::samples::SampleSet;
use crate::settings::FontSettings;

/// An authenticated user, as held in memory and mirrored to storage.
///
/// This is the credential with the password stripped; the field names
/// serialize in camelCase to match the persisted record format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub fonts: Vec<SavedFont>,
}

/// A font a user has generated and saved to their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFont {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub samples: Vec<SampleSet>,
    pub settings: FontSettings,
}

/// A seed-list entry. Lives only inside the session store, standing in
/// for a backend user table; never serialized, so the password never
/// leaves the process.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
    pub fonts: Vec<SavedFont>,
}

impl Credential {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Credential {
        Credential {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            fonts: Vec::new(),
        }
    }

    /// The single demo account every fresh store is seeded with.
    pub fn fixture() -> Credential {
        Credential::new("1", "John Doe", "john@example.com", "password123")
    }

    /// Strip the password, leaving the record that is safe to persist.
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at.clone(),
            fonts: self.fonts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_camel_case_without_password() {
        let user = Credential::fixture().to_user();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn user_roundtrips_through_json() {
        let user = Credential::fixture().to_user();
        let raw = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(user, back);
    }
}
