pub(crate) mod access_kind;
pub(crate) mod request_body;
pub(crate) mod request_helper;

pub use access_kind::AccessKind;
pub use request_body::RequestBody;
pub use request_helper::RequestHelper;
