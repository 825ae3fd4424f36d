use crate::ClientError;

use log::warn;

/// Items with a server-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// View-state of a list screen.
///
/// The list is replaced wholesale by a successful fetch and spliced only
/// after the server acknowledged a create/update/delete. Failures set
/// `error` and leave `items` as they were.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            is_loading: false,
        }
    }
}

impl<T: Identified> CollectionState<T> {
    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn begin(&mut self) {
        self.error = None;
        self.is_loading = true;
    }

    pub(crate) fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.is_loading = false;
    }

    pub(crate) fn append(&mut self, item: T) {
        self.items.push(item);
        self.is_loading = false;
    }

    pub(crate) fn replace(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self.is_loading = false;
    }

    pub(crate) fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
        self.is_loading = false;
    }

    pub(crate) fn fail(&mut self, action: &str, error: &ClientError) {
        warn!("Failed to {action}: {error}");
        self.error = Some(error.user_message());
        self.is_loading = false;
    }

    pub(crate) fn reject(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.is_loading = false;
    }
}
