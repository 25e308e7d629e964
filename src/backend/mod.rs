//! News backend: wire types, HTTP client and local process launcher

pub mod api;
pub mod sidecar;
pub mod types;
