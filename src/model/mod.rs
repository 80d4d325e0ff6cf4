//! Plain data types shared by the services and the CLI.

pub mod api;
pub mod report;
pub mod schema;
pub mod table;
