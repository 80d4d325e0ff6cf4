//! Charter fixtures: operator and aircraft rows plus service envelope endpoints.

use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn charter<'a>(&'a mut self) -> CharterFixtures<'a> {
        CharterFixtures { setup: self }
    }
}

pub struct CharterFixtures<'a> {
    pub setup: &'a mut TestContext,
}
