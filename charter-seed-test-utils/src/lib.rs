//! Test harness for the charter seeder.
//!
//! Tests configure an environment declaratively with [`TestBuilder`] (tables, fixture rows,
//! raw SQL, mock HTTP endpoints) and receive a [`TestContext`] holding an in-memory SQLite
//! database and a mockito server.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::charter::factory, TestBuilder, TestContext, TestError};
}
