pub mod context;
pub mod decision;

pub use context::RequestContext;
pub use decision::{Decision, HookOutput, RuleMatch};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::guards::{Guard, HookKind, classifier::ContextClassifier};
use crate::input::HookInput;

/// Registry of all guards, keyed by hook.
pub struct GuardRegistry {
    guards: HashMap<HookKind, Box<dyn Guard>>,
    classifier: ContextClassifier,
}

impl GuardRegistry {
    /// Build the registry from configuration.
    pub fn from_config(config: &Config) -> Self {
        use crate::guards::{
            plan::PlanGate, pr::PrStateGuard, prompt::PromptGuard, red::RedFirstGate,
        };

        let mut guards: HashMap<HookKind, Box<dyn Guard>> = HashMap::new();
        guards.insert(
            HookKind::PlanGate,
            Box::new(PlanGate::from_config(&config.sentinels)),
        );
        guards.insert(
            HookKind::PromptGuard,
            Box::new(PromptGuard::from_config(&config.prompt)),
        );
        guards.insert(
            HookKind::RedFirst,
            Box::new(RedFirstGate::from_config(&config.sentinels)),
        );
        guards.insert(
            HookKind::PrState,
            Box::new(PrStateGuard::from_config(&config.pr)),
        );

        Self {
            guards,
            classifier: ContextClassifier::from_config(&config.context),
        }
    }

    /// Classify the request and run one hook's guard against it.
    pub fn evaluate(&self, hook: HookKind, input: &HookInput, project_root: &Path) -> RuleMatch {
        let in_scope = self.classifier.is_sparc(input.prompt());
        let ctx = RequestContext::new(input, in_scope, project_root);
        match self.guards.get(&hook) {
            Some(guard) => guard.evaluate(&ctx),
            None => RuleMatch::allow(format!("no guard registered for {hook}")),
        }
    }
}

/// Resolve the project root from the configured environment variable.
///
/// An unset or empty variable means the current directory. Unlike a plain
/// `getenv`, a leading `~` and `$VAR` references in the value are expanded;
/// a value that fails to expand (undefined variable) is used verbatim.
pub fn project_root(env_var: &str) -> PathBuf {
    let raw = std::env::var(env_var)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| ".".to_string());
    expand_root(&raw)
}

fn expand_root(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GuardRegistry {
        GuardRegistry::from_config(&Config::default_config())
    }

    fn input(prompt: &str) -> HookInput {
        HookInput {
            user_prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    #[test]
    fn every_hook_has_a_guard() {
        let reg = registry();
        let dir = tempfile::tempdir().unwrap();
        for hook in HookKind::ALL {
            let result = reg.evaluate(hook, &input("hello"), dir.path());
            assert!(!result.reason.starts_with("no guard"), "{hook}");
        }
    }

    #[test]
    fn out_of_scope_never_blocks_gates() {
        let reg = registry();
        let dir = tempfile::tempdir().unwrap();
        for hook in [HookKind::PlanGate, HookKind::RedFirst, HookKind::PrState] {
            let result = reg.evaluate(hook, &input("gh pr ready, ready for review"), dir.path());
            assert_eq!(result.decision, Decision::Allow, "{hook}");
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let reg = registry();
        let dir = tempfile::tempdir().unwrap();
        let req = input("/sparc implement the lexer");
        for hook in HookKind::ALL {
            let first = reg.evaluate(hook, &req, dir.path());
            let second = reg.evaluate(hook, &req, dir.path());
            assert_eq!(first, second, "{hook}");
        }
    }

    #[test]
    fn expand_root_plain_path() {
        assert_eq!(expand_root("/srv/project"), PathBuf::from("/srv/project"));
    }

    #[test]
    fn expand_root_tilde_uses_home() {
        let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) else {
            return;
        };
        assert_eq!(expand_root("~/project"), Path::new(&home).join("project"));
    }

    #[test]
    fn expand_root_undefined_var_falls_back_to_raw() {
        let raw = "$SPARC_HOOKS_SURELY_UNDEFINED_VAR/x";
        assert_eq!(expand_root(raw), PathBuf::from(raw));
    }
}
