use charter_seed_test_utils::prelude::*;

use crate::data::{parent::ParentRepository, schema::SchemaRepository, table::TableRepository};

mod parent;
