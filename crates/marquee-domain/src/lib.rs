//! Domain types shared across Marquee crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod form;
pub mod id;
pub mod user;
