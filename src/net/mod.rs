//! REST auth API boundary: wire DTOs and the HTTP client.

pub mod api;
pub mod types;
