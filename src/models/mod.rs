//! Request and response payloads exchanged with the API.

pub mod auth;
pub mod credentials;
pub mod event;
pub mod group;

pub use auth::{AuthMethod, LoginRequest, RegisterRequest, TokenResponse};
pub use credentials::Credentials;
pub use event::EventRequest;
pub use group::{GroupRequest, Privacy};

use serde::Deserialize;

/// Any server object carrying an identifier. Other fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Identified {
    pub id: i64,
}

/// Whether `id` appears in a list of identified objects.
pub fn contains_id(items: &[Identified], id: i64) -> bool {
    items.iter().any(|item| item.id == id)
}
