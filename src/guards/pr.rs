use crate::config::PrConfig;
use crate::eval::{RequestContext, RuleMatch};
use crate::guards::{Guard, non_empty};

pub const READY_MESSAGE: &str =
    "Blocked: Only humans can mark PRs as ready-for-review. Claude Code creates draft PRs only.";
pub const READY_COMMAND_MESSAGE: &str =
    "Blocked: Cannot use 'gh pr ready'. PRs must remain in draft status until human review.";

/// Keeps SPARC pull requests in draft.
///
/// Ready patterns are literal fragments: `pr.*ready` only matches that exact
/// text, so `gh pr ready` falls through to its own message.
pub struct PrStateGuard {
    ready_patterns: Vec<String>,
    ready_command: String,
}

impl PrStateGuard {
    pub fn from_config(config: &PrConfig) -> Self {
        Self {
            ready_patterns: non_empty(&config.ready_patterns),
            ready_command: config.ready_command.clone(),
        }
    }
}

impl Guard for PrStateGuard {
    fn evaluate(&self, ctx: &RequestContext) -> RuleMatch {
        if !ctx.in_scope {
            return RuleMatch::allow("not in SPARC context");
        }

        if let Some(pattern) = ctx.first_match(&self.ready_patterns) {
            return RuleMatch::block(format!("ready-for-review pattern: {pattern}"), READY_MESSAGE);
        }

        if !self.ready_command.is_empty() && ctx.prompt.contains(&self.ready_command) {
            return RuleMatch::block(
                format!("ready command: {}", self.ready_command),
                READY_COMMAND_MESSAGE,
            );
        }

        RuleMatch::allow("no PR state change")
    }
}
