//! Command-line interface of the `charter-seed` binary.
//!
//! Reports go to stdout, logs to stderr. Every command returns an exit code: success when
//! its checks passed, failure otherwise.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::{
    config::Config,
    error::Error,
    model::{report::PopulateOutcome, table::SeedTable},
    service::{
        catalog::SchemaCatalog,
        populate::PopulateSettings,
        seed::{SeedPlan, SeedService},
        smoke::{SmokeChecks, SmokeClient},
        verify::RowCountVerifier,
    },
    startup,
};

/// Seeds, verifies and smoke-tests the charter marketplace demo database.
#[derive(Parser, Debug)]
#[command(name = "charter-seed", version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create the charter tables
    Migrate,
    /// Bring every table up to the target row count, then verify
    Seed {
        /// Minimum rows per table (overrides SEED_TARGET_COUNT)
        #[arg(long)]
        target: Option<u64>,
        /// Only seed these tables (repeatable)
        #[arg(long = "table", value_name = "NAME")]
        tables: Vec<SeedTable>,
        /// Delete the selected tables before seeding
        #[arg(long)]
        reset: bool,
        /// Seed of the random source, for reproducible fixtures
        #[arg(long = "seed", value_name = "U64")]
        rng_seed: Option<u64>,
    },
    /// Report the row count of every table
    Verify {
        /// Minimum rows per table (overrides SEED_TARGET_COUNT)
        #[arg(long)]
        target: Option<u64>,
    },
    /// Print the live column set of the charter tables
    Inspect {
        /// Only inspect these tables (repeatable)
        #[arg(long = "table", value_name = "NAME")]
        tables: Vec<SeedTable>,
    },
    /// Check the endpoints of a deployed service
    Smoke {
        /// Base URL of the service (overrides API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Tool to call through POST /api/tools/<name> (repeatable)
        #[arg(long = "tool", value_name = "NAME")]
        tools: Vec<String>,
        /// JSON body sent to every tool
        #[arg(long, value_name = "JSON", default_value = "{}")]
        tool_body: String,
        /// JSON body sent to POST /api/operational-data
        #[arg(long, value_name = "JSON", default_value = "{}")]
        operational_body: String,
    },
}

/// Run a parsed command.
pub async fn run(cli: Cli, config: Config) -> Result<ExitCode, Error> {
    match cli.command {
        Command::Migrate => migrate(&config).await,
        Command::Seed {
            target,
            tables,
            reset,
            rng_seed,
        } => {
            let plan = SeedPlan::only(&tables)
                .with_reset(reset)
                .with_rng_seed(rng_seed);
            seed(&config, target, plan).await
        }
        Command::Verify { target } => verify(&config, target).await,
        Command::Inspect { tables } => inspect(&config, &tables).await,
        Command::Smoke {
            base_url,
            tools,
            tool_body,
            operational_body,
        } => {
            let checks = SmokeChecks {
                tools,
                tool_body: serde_json::from_str::<Value>(&tool_body)?,
                operational_body: serde_json::from_str::<Value>(&operational_body)?,
            };
            smoke(&config, base_url, &checks).await
        }
    }
}

async fn migrate(config: &Config) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;
    startup::run_migrations(&db).await?;
    println!("migrations applied");

    Ok(ExitCode::SUCCESS)
}

async fn seed(config: &Config, target: Option<u64>, plan: SeedPlan) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;
    let mut settings = PopulateSettings::from(config);
    if let Some(target) = target {
        settings.target = target;
    }

    let service = SeedService::new(&db, settings, config.database_schema.clone());
    let reports = service.run(&plan).await?;
    for report in &reports {
        println!("{}", report);
    }

    let verification = RowCountVerifier::new(&db, settings.target)
        .verify(&plan.tables)
        .await;
    println!();
    println!("{}", verification);

    let failed = reports
        .iter()
        .any(|r| matches!(r.outcome, PopulateOutcome::Failed(_)));

    Ok(exit_code(!failed && verification.is_adequate()))
}

async fn verify(config: &Config, target: Option<u64>) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;
    let report = RowCountVerifier::new(&db, target.unwrap_or(config.target_count))
        .verify_all()
        .await;
    println!("{}", report);

    Ok(exit_code(report.is_adequate()))
}

async fn inspect(config: &Config, tables: &[SeedTable]) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;
    let mut catalog = SchemaCatalog::new(&db, config.database_schema.clone());
    let tables = SeedPlan::only(tables).tables;

    let mut all_found = true;
    for table in tables {
        let schema = catalog.describe(table).await?;
        all_found &= schema.exists();
        println!("{}", schema);
    }

    Ok(exit_code(all_found))
}

async fn smoke(
    config: &Config,
    base_url: Option<String>,
    checks: &SmokeChecks,
) -> Result<ExitCode, Error> {
    let base_url = match base_url {
        Some(url) => url,
        None => config.api_base_url()?.to_string(),
    };

    let client = SmokeClient::new(startup::build_http_client()?, base_url);
    let report = client.run(checks).await;
    println!("{}", report);

    Ok(exit_code(report.all_passed()))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
