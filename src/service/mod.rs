//! Service layer: seeding, verification, schema inspection and smoke checks.
//!
//! Services coordinate the repositories in [`crate::data`] with the row factories in
//! [`crate::fixture`]. [`seed::SeedService`] walks the fixed parents-first table order and
//! hands each table to the [`populate::Populator`].

pub mod catalog;
pub mod populate;
pub mod seed;
pub mod smoke;
pub mod verify;
