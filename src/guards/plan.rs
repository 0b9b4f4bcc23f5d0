use crate::config::SentinelConfig;
use crate::eval::{RequestContext, RuleMatch};
use crate::guards::Guard;

pub const NO_PLAN_MESSAGE: &str =
    "No approved plan found. Run /sparc:plan, review, then create .claude/plan.approved";

/// Blocks SPARC requests until the plan approval sentinel exists.
pub struct PlanGate {
    plan_approved: String,
}

impl PlanGate {
    pub fn from_config(config: &SentinelConfig) -> Self {
        Self {
            plan_approved: config.plan_approved.clone(),
        }
    }
}

impl Guard for PlanGate {
    fn evaluate(&self, ctx: &RequestContext) -> RuleMatch {
        if !ctx.in_scope {
            return RuleMatch::allow("not in SPARC context");
        }
        if ctx.sentinel_exists(&self.plan_approved) {
            return RuleMatch::allow(format!("plan approved ({})", self.plan_approved));
        }
        RuleMatch::block(format!("missing {}", self.plan_approved), NO_PLAN_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::eval::Decision;
    use crate::input::HookInput;
    use std::path::Path;

    fn eval(in_scope: bool, root: &Path) -> RuleMatch {
        let gate = PlanGate::from_config(&Config::default_config().sentinels);
        let input = HookInput::default();
        gate.evaluate(&RequestContext::new(&input, in_scope, root))
    }

    #[test]
    fn out_of_scope_allows_without_plan() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(eval(false, dir.path()).decision, Decision::Allow);
    }

    #[test]
    fn in_scope_blocks_without_plan() {
        let dir = tempfile::tempdir().unwrap();
        let result = eval(true, dir.path());
        assert_eq!(result.decision, Decision::Block);
        assert_eq!(result.message.as_deref(), Some(NO_PLAN_MESSAGE));
    }

    #[test]
    fn in_scope_allows_with_plan() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".claude")).unwrap();
        std::fs::write(dir.path().join(".claude/plan.approved"), "").unwrap();
        let result = eval(true, dir.path());
        assert_eq!(result.decision, Decision::Allow);
        assert!(result.message.is_none());
    }

    #[test]
    fn sentinel_directory_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".claude/plan.approved")).unwrap();
        assert_eq!(eval(true, dir.path()).decision, Decision::Allow);
    }
}
