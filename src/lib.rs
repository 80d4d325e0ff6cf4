//! Fixture seeding, row-count verification and API smoke tests for the charter marketplace
//! demo database.
//!
//! The crate brings every charter table up to a target row count with synthetic records
//! (operators, aircraft, flight legs, bookings, analytics), classifies the resulting row
//! counts, and checks the endpoints of a deployed marketplace service. All entry points
//! share a single environment-backed [`config::Config`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod fixture;
pub mod model;
pub mod service;
pub mod startup;
