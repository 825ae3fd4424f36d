use crate::api::models::ImageUpload;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub location: Option<String>,
    /// Absolute URL or a path relative to the backend host
    pub profile_picture: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Partial profile edit. Unset fields are left as they are on the server.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<ImageUpload>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.location.is_none()
            && self.profile_picture.is_none()
    }

    /// Text fields as (name, value) pairs, in the order the server documents them.
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(ref full_name) = self.full_name {
            fields.push(("full_name", full_name.clone()));
        }
        if let Some(age) = self.age {
            fields.push(("age", age.to_string()));
        }
        if let Some(ref gender) = self.gender {
            fields.push(("gender", gender.clone()));
        }
        if let Some(ref location) = self.location {
            fields.push(("location", location.clone()));
        }
        fields
    }
}
