//! Guard specs: per-hook logic for deciding allow/block.
//!
//! Each hook (plan gate, prompt guard, red-first gate, PR-state guard) has its
//! own `Guard` implementation. All of them share the `ContextClassifier`
//! verdict carried in the `RequestContext`.

/// SPARC context detection from prompt markers.
pub mod classifier;
/// Blocks SPARC requests until the plan is approved.
pub mod plan;
/// Blocks PR status changes that only humans may make.
pub mod pr;
/// Blocks dangerous instructions, with extra patterns inside SPARC.
pub mod prompt;
/// Blocks SPARC implementation work until a failing test exists.
pub mod red;

use std::fmt;
use std::str::FromStr;

use crate::eval::{RequestContext, RuleMatch};

/// Trait for hook guards.
///
/// Each implementation inspects the request context (prompt, scope, sentinel
/// files) and returns a `RuleMatch` with the decision and reason.
pub trait Guard: Send + Sync {
    /// Evaluate the request in the given context and return a decision.
    fn evaluate(&self, ctx: &RequestContext) -> RuleMatch;
}

/// How a hook reports its decision to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// One `{"block": ..}` JSON record on stdout.
    Json,
    /// Exit code 0 to proceed, 2 to block, reason on stderr.
    ExitCode,
}

/// The hooks this binary can run, selected by the first CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    PlanGate,
    PromptGuard,
    RedFirst,
    PrState,
}

impl HookKind {
    pub const ALL: [HookKind; 4] = [
        HookKind::PlanGate,
        HookKind::PromptGuard,
        HookKind::RedFirst,
        HookKind::PrState,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::PlanGate => "plan-gate",
            HookKind::PromptGuard => "prompt-guard",
            HookKind::RedFirst => "red-first",
            HookKind::PrState => "pr-state",
        }
    }

    pub fn signal(self) -> Signal {
        match self {
            HookKind::RedFirst => Signal::ExitCode,
            _ => Signal::Json,
        }
    }

    /// Whether unparseable input is treated as an empty record instead of
    /// failing the invocation.
    pub fn tolerates_malformed_input(self) -> bool {
        self == HookKind::RedFirst
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plan-gate" | "enforce-plan-mode" | "enforce_plan_mode" => Ok(HookKind::PlanGate),
            "prompt-guard" | "prompt_guard" => Ok(HookKind::PromptGuard),
            "red-first" | "require-red-first" | "require_red_first" => Ok(HookKind::RedFirst),
            "pr-state" | "verify-pr-state" | "verify_pr_state" => Ok(HookKind::PrState),
            other => Err(format!("unknown hook: {other}")),
        }
    }
}

/// Copy a pattern list, dropping empty entries (they would match every prompt).
///
/// Patterns keep their configured case and are matched against the lowercased
/// prompt, so a pattern with upper-case letters never matches.
pub(crate) fn non_empty(patterns: &[String]) -> Vec<String> {
    patterns.iter().filter(|p| !p.is_empty()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for kind in HookKind::ALL {
            assert_eq!(kind.as_str().parse::<HookKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_script_aliases() {
        assert_eq!("enforce_plan_mode".parse::<HookKind>(), Ok(HookKind::PlanGate));
        assert_eq!("prompt_guard".parse::<HookKind>(), Ok(HookKind::PromptGuard));
        assert_eq!("require_red_first".parse::<HookKind>(), Ok(HookKind::RedFirst));
        assert_eq!("verify-pr-state".parse::<HookKind>(), Ok(HookKind::PrState));
    }

    #[test]
    fn parse_unknown() {
        assert!("lint".parse::<HookKind>().is_err());
    }

    #[test]
    fn only_red_first_signals_by_exit_code() {
        for kind in HookKind::ALL {
            let expected = if kind == HookKind::RedFirst {
                Signal::ExitCode
            } else {
                Signal::Json
            };
            assert_eq!(kind.signal(), expected, "{kind}");
            assert_eq!(
                kind.tolerates_malformed_input(),
                kind == HookKind::RedFirst,
                "{kind}"
            );
        }
    }
}
