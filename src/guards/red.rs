use crate::config::SentinelConfig;
use crate::eval::{RequestContext, RuleMatch};
use crate::guards::Guard;

pub const RED_FIRST_MESSAGE: &str = "TDD: start with one failing test (create .claude/tdd.red). The implementer should do this automatically on the first RED step.";

/// Blocks SPARC work until the TDD cycle has reached red (or green).
pub struct RedFirstGate {
    red: String,
    green: String,
}

impl RedFirstGate {
    pub fn from_config(config: &SentinelConfig) -> Self {
        Self {
            red: config.tdd_red.clone(),
            green: config.tdd_green.clone(),
        }
    }
}

impl Guard for RedFirstGate {
    fn evaluate(&self, ctx: &RequestContext) -> RuleMatch {
        if !ctx.in_scope {
            return RuleMatch::allow("not in SPARC context");
        }
        if ctx.sentinel_exists(&self.red) {
            return RuleMatch::allow(format!("red phase ({})", self.red));
        }
        if ctx.sentinel_exists(&self.green) {
            return RuleMatch::allow(format!("green phase ({})", self.green));
        }
        RuleMatch::block("no failing test recorded", RED_FIRST_MESSAGE)
    }
}
