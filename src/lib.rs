mod config;
mod evaluate;
mod guard;
mod matcher;
mod parse;
mod request;
mod types;

pub use config::{paths, ConfigSource, RawValue, StaticConfig, StaticConfigBuilder};
pub use evaluate::{evaluate, evaluate_detailed};
pub use guard::Gatekeeper;
pub use parse::{parse_email, EmailParts, ParseError};
pub use request::RequestKind;
pub use types::{
    CheckContext, Decision, Denial, DenyReason, EvaluationReport, Identity, RuleSet,
    RuleSetBuilder,
};
