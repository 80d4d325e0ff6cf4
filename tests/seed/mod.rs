use charter_seed::{
    data::table::count_rows,
    model::{report::PopulateOutcome, table::SeedTable},
    service::seed::{SeedPlan, SeedService},
};
use charter_seed_test_utils::prelude::*;

use crate::{aircraft_table_sql, operators_table_sql, test_settings};

mod backfill;
mod full_run;
mod schema_drift;
