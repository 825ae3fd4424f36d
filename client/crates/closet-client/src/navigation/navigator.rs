use crate::navigation::Route;

/// Host-provided navigation. Implementations replace the visible screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
