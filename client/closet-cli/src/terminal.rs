use closet_client::{Navigator, RecordingNavigator, Route};

/// Navigator for a terminal session: there is no screen stack, so the
/// requested routes are only recorded and reported in the command output.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    history: RecordingNavigator,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the last command left the user, if it navigated at all.
    pub fn last_route(&self) -> Option<Route> {
        self.history.last()
    }

    pub fn route_count(&self) -> usize {
        self.history.count()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        self.history.navigate(route);
    }
}
