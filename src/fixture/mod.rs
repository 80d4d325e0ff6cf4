//! Synthetic row factories for every charter table.
//!
//! Each factory builds one `ActiveModel` from a row index and a random number generator.
//! Scalar fields come from uniform choices over the fixed enumerations in [`catalog`] or
//! from uniform ranges scaled to real-world magnitudes. Foreign keys are always drawn from
//! a [`pool::Parents`] set fetched from the database beforehand, never invented.

pub mod analytics;
pub mod catalog;
pub mod charter;
pub mod fleet;
pub mod ident;
pub mod pool;
pub mod review;

#[cfg(test)]
mod tests;
