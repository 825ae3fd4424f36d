use serde::Deserialize;

/// A list endpoint's body: either a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Plain(items) => items,
            ListPayload::Paginated { results } => results,
        }
    }
}
