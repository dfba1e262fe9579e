//! Backend API client for the tea shop point of sale.
//!
//! This crate provides:
//! - `PosApi` - Typed methods over the backend routes
//! - `Transport` trait - Pluggable HTTP layer
//! - `SpinTransport` - Outbound HTTP inside a Spin component
//! - `StaticTransport` - Canned responses for tests and demos
//! - `ApiError` - Failure classification at the HTTP boundary

mod api;
mod error;
mod transport;

pub use api::PosApi;
pub use error::ApiError;
#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;
pub use transport::{StaticTransport, Transport};
