use crate::api::models::ImageUpload;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewClosetItem {
    pub name: String,
    pub category: Option<String>,
    pub color: Option<String>,
    pub season: Option<String>,
    pub image: Option<ImageUpload>,
}

impl NewClosetItem {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.clone())];
        if let Some(ref category) = self.category {
            fields.push(("category", category.clone()));
        }
        if let Some(ref color) = self.color {
            fields.push(("color", color.clone()));
        }
        if let Some(ref season) = self.season {
            fields.push(("season", season.clone()));
        }
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClosetItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}
