//! Data access layer repositories.
//!
//! Repositories wrap the four database operations the seeder relies on: counting rows,
//! selecting parent rows with a limit, inserting rows and introspecting live table columns.

pub mod parent;
pub mod schema;
pub mod table;

#[cfg(test)]
mod tests;
