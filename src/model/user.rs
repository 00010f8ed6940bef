use serde::{Deserialize, Serialize};

/// Profile of the person using the app. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "ผู้ใช้".to_string(),
            email: "user@example.com".to_string(),
            avatar: "https://i.pravatar.cc/150?u=user".to_string(),
        }
    }
}

/// Shallow patch for [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn merged(&self, patch: &UserPatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            avatar: patch.avatar.clone().unwrap_or_else(|| self.avatar.clone()),
        }
    }
}
