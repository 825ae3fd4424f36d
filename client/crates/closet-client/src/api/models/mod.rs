pub(crate) mod auth;
pub(crate) mod closet_item;
pub(crate) mod event;
pub(crate) mod id;
pub(crate) mod image_upload;
pub(crate) mod list_payload;
pub(crate) mod recommendation;
pub(crate) mod user;

pub use auth::{
    CsrfTokenResponse, LoginResponse, PasswordResetResponse, SignupProfile, SignupRequest,
    SignupResponse, TokenResponse,
};
pub use closet_item::{ClosetItem, ClosetItemUpdate, NewClosetItem};
pub use event::{Event, EventUpdate, NewEvent};
pub use image_upload::ImageUpload;
pub use list_payload::ListPayload;
pub use recommendation::Recommendation;
pub use user::{ProfileUpdate, User, UserProfile};
