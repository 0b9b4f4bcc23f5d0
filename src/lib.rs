//! sparc-hooks: Claude Code hooks that gate the SPARC workflow.
//!
//! Each hook reads one JSON record from stdin, classifies the prompt as
//! in or out of SPARC context, and returns [`eval::Decision::Allow`] or
//! [`eval::Decision::Block`]. Workflow phase (plan approved, TDD red/green)
//! is read from sentinel files under the project root.
//!
//! # Architecture
//!
//! - **[`input`]**: The stdin record.
//! - **[`eval`]**: Guard registry, decision types, per-request context, project root.
//! - **[`guards`]**: Context classifier and the four guards (plan, prompt, red-first, PR state).
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: Decision logging to `~/.local/share/sparc-hooks/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: registry, decision types, request context.
pub mod eval;
/// Guard trait, hook names, and per-hook implementations.
pub mod guards;
/// Hook input record parsing.
pub mod input;
/// File-based decision logging.
pub mod logging;

use std::path::Path;

use eval::RuleMatch;
use guards::HookKind;
use input::HookInput;

/// Build the registry from default config and run one hook.
///
/// This is the main entry point for tests and simple usage.
/// The binary loads the user overlay and resolves the project root itself.
pub fn evaluate(hook: HookKind, input: &HookInput, project_root: &Path) -> RuleMatch {
    let config = config::Config::default_config();
    let registry = eval::GuardRegistry::from_config(&config);
    registry.evaluate(hook, input, project_root)
}
