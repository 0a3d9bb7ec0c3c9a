//! Sequential scenario execution and outcome classification

use super::context::ScenarioContext;
use super::Scenario;
use crate::config::PetFriendsConfig;
use crate::core_types::PetFriendsApi;
use crate::error::{ErrorCategory, PetFriendsError, PetFriendsResult};
use crate::logging::{log_info, log_warn};
use std::fmt;
use std::time::{Duration, Instant};

/// How a scenario run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,

    /// The service answered differently from what the scenario asserts
    Failed { message: String },

    /// A local precondition did not hold (fixture, configuration, setup).
    /// The remote behaviour under test was never exercised.
    PreconditionFailed { message: String },

    /// Anything else went wrong while running (transport, unreadable body)
    Errored { message: String },
}

impl ScenarioOutcome {
    /// Classify the result of a scenario body
    pub fn from_result(result: PetFriendsResult<()>) -> Self {
        let err = match result {
            Ok(()) => return Self::Passed,
            Err(err) => err,
        };

        match (err.category(), err) {
            (_, PetFriendsError::AssertionFailed { message }) => Self::Failed { message },
            (ErrorCategory::Configuration | ErrorCategory::Precondition, err) => {
                Self::PreconditionFailed {
                    message: err.to_string(),
                }
            }
            (_, err) => Self::Errored {
                message: format!("Error while running scenario: {err}"),
            },
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed { message }
            | Self::PreconditionFailed { message }
            | Self::Errored { message } => Some(message),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed { .. } => "FAIL",
            Self::PreconditionFailed { .. } => "PRECONDITION",
            Self::Errored { .. } => "ERROR",
        }
    }
}

/// Result of one scenario run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: ScenarioOutcome,
    pub duration: Duration,
}

impl ScenarioReport {
    pub fn is_passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {} ({} ms)",
            self.outcome.label(),
            self.scenario.name(),
            self.duration.as_millis()
        )?;
        if let Some(message) = self.outcome.message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Reports of a batch of scenario runs, in execution order
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub reports: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_passed()).count()
    }

    pub fn not_passed(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.reports.iter().filter(|r| !r.is_passed())
    }

    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(ScenarioReport::is_passed)
    }

    pub fn get(&self, scenario: Scenario) -> Option<&ScenarioReport> {
        self.reports.iter().find(|r| r.scenario == scenario)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{report}")?;
        }
        write!(
            f,
            "{} of {} scenarios passed",
            self.passed_count(),
            self.reports.len()
        )
    }
}

/// Runs scenarios one at a time against a [`PetFriendsApi`]
///
/// Runs are strictly sequential: scenarios mutate the same remote pet list.
pub struct ScenarioRunner<'a> {
    api: &'a dyn PetFriendsApi,
    config: &'a PetFriendsConfig,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(api: &'a dyn PetFriendsApi, config: &'a PetFriendsConfig) -> Self {
        Self { api, config }
    }

    /// Run one scenario, tear down whatever it created, and classify the
    /// result. Never fails: every error becomes an outcome.
    pub async fn run(&self, scenario: Scenario) -> ScenarioReport {
        let mut ctx = ScenarioContext::new(self.api, self.config);
        let start_time = Instant::now();

        let result = scenario.execute(&mut ctx).await;
        ctx.teardown().await;

        let duration = start_time.elapsed();
        let outcome = ScenarioOutcome::from_result(result);

        match outcome.message() {
            None => log_info!(
                scenario = scenario.name(),
                duration_ms = duration.as_millis() as u64,
                "Scenario passed"
            ),
            Some(message) => log_warn!(
                scenario = scenario.name(),
                outcome = outcome.label(),
                message = %message,
                duration_ms = duration.as_millis() as u64,
                "Scenario did not pass"
            ),
        }

        ScenarioReport {
            scenario,
            outcome,
            duration,
        }
    }

    pub async fn run_selected(&self, scenarios: &[Scenario]) -> SuiteReport {
        let mut reports = Vec::with_capacity(scenarios.len());
        for &scenario in scenarios {
            reports.push(self.run(scenario).await);
        }
        SuiteReport { reports }
    }

    pub async fn run_all(&self) -> SuiteReport {
        self.run_selected(&Scenario::ALL).await
    }
}
