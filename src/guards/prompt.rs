use crate::config::PromptConfig;
use crate::eval::{RequestContext, RuleMatch};
use crate::guards::{Guard, non_empty};

pub const DANGEROUS_MESSAGE: &str =
    "Blocked potentially dangerous instruction. Rephrase with intent.";
pub const SPARC_DANGEROUS_MESSAGE: &str =
    "Blocked potentially dangerous Rust operation during SPARC workflow.";

/// Scans prompts for dangerous instructions.
///
/// Basic patterns apply to every prompt and win over the SPARC-only list.
/// The prompt is lowercased; patterns are matched as configured, so the
/// upper-case defaults (`BEGIN SSH KEY`, `DROP TABLE`) never fire.
pub struct PromptGuard {
    basic: Vec<String>,
    sparc: Vec<String>,
}

impl PromptGuard {
    pub fn from_config(config: &PromptConfig) -> Self {
        Self {
            basic: non_empty(&config.basic_dangerous),
            sparc: non_empty(&config.sparc_dangerous),
        }
    }
}

impl Guard for PromptGuard {
    fn evaluate(&self, ctx: &RequestContext) -> RuleMatch {
        if let Some(pattern) = ctx.first_match(&self.basic) {
            return RuleMatch::block(format!("dangerous pattern: {pattern}"), DANGEROUS_MESSAGE);
        }

        if ctx.in_scope
            && let Some(pattern) = ctx.first_match(&self.sparc)
        {
            return RuleMatch::block(
                format!("SPARC dangerous pattern: {pattern}"),
                SPARC_DANGEROUS_MESSAGE,
            );
        }

        RuleMatch::allow("no dangerous pattern")
    }
}
