//! Reports printed by the seed, verify and smoke commands.

use std::fmt;

/// How a single table's population ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateOutcome {
    /// The table already held at least the target number of rows.
    AlreadySatisfied,
    /// Rows were generated and inserted (some may have failed).
    Completed,
    /// The table was not touched, e.g. missing parents or schema drift.
    Skipped(String),
    /// The table could not be processed, e.g. its row count could not be read.
    Failed(String),
}

/// Result of bringing one table up to its target row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    /// Table name
    pub table: &'static str,
    /// Rows present before population
    pub existing: u64,
    /// Target minimum row count
    pub target: u64,
    /// Rows generated and attempted
    pub attempted: u64,
    /// Rows accepted by the database
    pub inserted: u64,
    /// Rows rejected by the database
    pub failed: u64,
    /// Overall outcome
    pub outcome: PopulateOutcome,
}

impl PopulateReport {
    /// Create an empty report for a table.
    pub fn new(table: &'static str, target: u64) -> Self {
        Self {
            table,
            existing: 0,
            target,
            attempted: 0,
            inserted: 0,
            failed: 0,
            outcome: PopulateOutcome::Completed,
        }
    }

    /// A report for a table that was left untouched.
    pub fn skipped(table: &'static str, target: u64, reason: impl Into<String>) -> Self {
        Self {
            outcome: PopulateOutcome::Skipped(reason.into()),
            ..Self::new(table, target)
        }
    }

    /// A report for a table that could not be processed.
    pub fn failed(table: &'static str, target: u64, reason: impl Into<String>) -> Self {
        Self {
            outcome: PopulateOutcome::Failed(reason.into()),
            ..Self::new(table, target)
        }
    }

    /// Rows still missing to reach the target after this run.
    pub fn deficit(&self) -> u64 {
        self.target.saturating_sub(self.existing + self.inserted)
    }
}

impl fmt::Display for PopulateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            PopulateOutcome::AlreadySatisfied => write!(
                f,
                "{}: 0 rows needed ({} existing)",
                self.table, self.existing
            ),
            PopulateOutcome::Completed => write!(
                f,
                "{}: {} rows needed, {} inserted, {} failed",
                self.table, self.attempted, self.inserted, self.failed
            ),
            PopulateOutcome::Skipped(reason) => write!(f, "{}: skipped ({})", self.table, reason),
            PopulateOutcome::Failed(reason) => write!(f, "{}: failed ({})", self.table, reason),
        }
    }
}

/// Row count classification of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No rows
    Empty,
    /// Some rows, fewer than the target
    Partial,
    /// At least the target number of rows
    Adequate,
}

impl Classification {
    /// Classify a row count against the target.
    pub fn of(count: u64, target: u64) -> Self {
        if count == 0 {
            Classification::Empty
        } else if count < target {
            Classification::Partial
        } else {
            Classification::Adequate
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Empty => "EMPTY",
            Classification::Partial => "PARTIAL",
            Classification::Adequate => "ADEQUATE",
        })
    }
}

/// The row count of a single table, or the error that prevented reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    /// Table name
    pub table: &'static str,
    /// Row count or error message
    pub count: Result<u64, String>,
}

/// Row counts of every verified table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Target used for classification
    pub target: u64,
    /// One entry per table, in verification order
    pub tables: Vec<TableCount>,
}

impl VerificationReport {
    /// Classification of a table entry, `None` when its count could not be read.
    pub fn classify(&self, entry: &TableCount) -> Option<Classification> {
        entry
            .count
            .as_ref()
            .ok()
            .map(|count| Classification::of(*count, self.target))
    }

    /// Number of tables with the given classification.
    pub fn count_of(&self, classification: Classification) -> usize {
        self.tables
            .iter()
            .filter(|entry| self.classify(entry) == Some(classification))
            .count()
    }

    /// Whether every table reached the target.
    pub fn is_adequate(&self) -> bool {
        self.count_of(Classification::Adequate) == self.tables.len()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.tables {
            match &entry.count {
                Ok(count) => writeln!(
                    f,
                    "{}: {} records | {}",
                    entry.table,
                    count,
                    Classification::of(*count, self.target)
                )?,
                Err(error) => writeln!(f, "{}: ERROR | {}", entry.table, error)?,
            }
        }

        let errors = self.tables.iter().filter(|e| e.count.is_err()).count();
        write!(
            f,
            "{} tables: {} adequate, {} partial, {} empty, {} errors (target {})",
            self.tables.len(),
            self.count_of(Classification::Adequate),
            self.count_of(Classification::Partial),
            self.count_of(Classification::Empty),
            errors,
            self.target
        )
    }
}

/// Result of one HTTP smoke check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeOutcome {
    /// Check name, e.g. `GET /health`
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// HTTP status, absent on transport errors
    pub status: Option<u16>,
    /// Failure reason or a short summary of the response
    pub detail: String,
}

impl fmt::Display for SmokeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "PASS" } else { "FAIL" };
        match self.status {
            Some(status) => write!(f, "[{}] {} ({}) {}", verdict, self.name, status, self.detail),
            None => write!(f, "[{}] {} {}", verdict, self.name, self.detail),
        }
    }
}

/// Results of a smoke test run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmokeReport {
    /// One outcome per check, in execution order
    pub outcomes: Vec<SmokeOutcome>,
}

impl SmokeReport {
    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        let passed = self.outcomes.iter().filter(|o| o.passed).count();
        write!(f, "{}/{} checks passed", passed, self.outcomes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(Classification::of(0, 20), Classification::Empty);
        assert_eq!(Classification::of(1, 20), Classification::Partial);
        assert_eq!(Classification::of(19, 20), Classification::Partial);
        assert_eq!(Classification::of(20, 20), Classification::Adequate);
        assert_eq!(Classification::of(250, 20), Classification::Adequate);
    }

    #[test]
    fn formats_verification_lines() {
        let report = VerificationReport {
            target: 20,
            tables: vec![
                TableCount {
                    table: "operators",
                    count: Ok(20),
                },
                TableCount {
                    table: "aircraft",
                    count: Ok(19),
                },
                TableCount {
                    table: "bookings",
                    count: Err("no such table: bookings".to_string()),
                },
            ],
        };

        let output = report.to_string();
        assert!(output.contains("operators: 20 records | ADEQUATE"));
        assert!(output.contains("aircraft: 19 records | PARTIAL"));
        assert!(output.contains("bookings: ERROR | no such table: bookings"));
        assert!(output.ends_with("3 tables: 1 adequate, 1 partial, 0 empty, 1 errors (target 20)"));
        assert!(!report.is_adequate());
    }

    #[test]
    fn formats_already_satisfied_table() {
        let mut report = PopulateReport::new("operators", 20);
        report.existing = 20;
        report.outcome = PopulateOutcome::AlreadySatisfied;

        assert_eq!(report.to_string(), "operators: 0 rows needed (20 existing)");
        assert_eq!(report.deficit(), 0);
    }
}
