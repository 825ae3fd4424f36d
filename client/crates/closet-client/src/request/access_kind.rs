use std::fmt;

use reqwest::Method;

/// Whether a request only reads server state or changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

impl AccessKind {
    pub fn is_write(&self) -> bool {
        matches!(self, AccessKind::Write)
    }
}

impl From<&Method> for AccessKind {
    fn from(method: &Method) -> Self {
        if method.is_safe() {
            AccessKind::Read
        } else {
            AccessKind::Write
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => f.write_str("read"),
            AccessKind::Write => f.write_str("write"),
        }
    }
}
