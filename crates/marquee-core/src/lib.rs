//! Shared service plumbing: errors, health checks, middleware and tracing.

pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
