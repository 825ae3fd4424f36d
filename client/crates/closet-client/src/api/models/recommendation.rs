use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    #[serde(default)]
    pub event: Option<i64>,
    /// Closet item ids that make up the suggested outfit
    #[serde(default)]
    pub items: Vec<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
