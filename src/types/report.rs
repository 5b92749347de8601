use std::fmt;
use std::time::Duration;

use super::decision::Decision;

/// Detailed evaluation report returned by
/// [`evaluate_detailed()`](crate::evaluate_detailed).
///
/// Contains the decision, the names of the checks performed in execution
/// order, and the wall-clock duration. The check sequence makes the
/// short-circuit order observable: gates that allow early stop the list, and
/// the email check always appears before the name check.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    decision: Decision,
    checks: Vec<&'static str>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(decision: Decision, checks: Vec<&'static str>, duration: Duration) -> Self {
        Self {
            decision,
            checks,
            duration,
        }
    }

    /// The decision, same as [`evaluate()`](crate::evaluate).
    #[must_use]
    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    /// Names of the checks performed, in execution order.
    #[must_use]
    pub fn checks(&self) -> &[&'static str] {
        &self.checks
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision: {}", self.decision)?;
        write!(f, ", checks: [{}]", self.checks.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
