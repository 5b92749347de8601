mod check_context;
mod decision;
mod identity;
mod report;
mod ruleset;

pub use check_context::CheckContext;
pub use decision::{Decision, Denial, DenyReason};
pub use identity::Identity;
pub use report::EvaluationReport;
pub use ruleset::{RuleSet, RuleSetBuilder};
