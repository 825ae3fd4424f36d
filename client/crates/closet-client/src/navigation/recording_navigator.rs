use crate::navigation::{Navigator, Route};

use std::sync::Mutex;

use log::info;

/// Navigator that keeps the history of routes it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes
            .lock()
            .ok()
            .and_then(|routes| routes.last().cloned())
    }

    pub fn count(&self) -> usize {
        self.routes.lock().map(|routes| routes.len()).unwrap_or(0)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {route}");
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
