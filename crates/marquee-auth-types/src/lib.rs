//! Session types shared across Marquee crates.
//!
//! Provides session JWT issue/validation, the session cookie builders, and the
//! `CurrentUser` / `MaybeUser` extractors.

pub mod cookie;
pub mod identity;
pub mod token;
