//! Domain types shared by the users and orders services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts at the edges.

pub mod id;
pub mod order;
pub mod user;
