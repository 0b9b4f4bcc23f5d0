use crate::eval::RuleMatch;
use crate::guards::HookKind;
use crate::input::HookInput;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Route `log` output to ~/.local/share/sparc-hooks/decisions.log.
/// Best-effort: failures are silently ignored (logging must never block the hook).
pub fn init() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/sparc-hooks");
    let _ = std::fs::create_dir_all(&log_dir);

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("decisions.log"))
    else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}

/// Record one decision. A no-op unless `init` installed the logger.
pub fn log_decision(hook: HookKind, input: &HookInput, result: &RuleMatch) {
    log::info!("{}", decision_line(hook, input, result));
}

/// Single-line record: hook, decision, tool, truncated prompt, reason.
fn decision_line(hook: HookKind, input: &HookInput, result: &RuleMatch) -> String {
    let prompt_truncated: String = input.prompt().chars().take(200).collect();
    let tool = match input.tool() {
        "" => "-",
        t => t,
    };
    format!(
        "{hook}\t{decision}\t{tool}\t{prompt}\t{reason}",
        decision = result.decision.label(),
        tool = oneline(tool),
        prompt = oneline(&prompt_truncated),
        reason = oneline(&result.reason),
    )
}

fn oneline(s: &str) -> String {
    s.replace(['\r', '\n'], " ").replace('\t', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(prompt: &str, tool: Option<&str>) -> HookInput {
        HookInput {
            user_prompt: Some(prompt.into()),
            tool: tool.map(Into::into),
        }
    }

    #[test]
    fn line_has_five_fields() {
        let line = decision_line(
            HookKind::PlanGate,
            &input("/sparc\tdo it\nnow", Some("Edit")),
            &RuleMatch::block("missing .claude/plan.approved", "No plan"),
        );
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(
            fields,
            vec![
                "plan-gate",
                "BLOCK",
                "Edit",
                "/sparc do it now",
                "missing .claude/plan.approved"
            ]
        );
    }

    #[test]
    fn missing_tool_logged_as_dash() {
        let line = decision_line(HookKind::PrState, &input("hi", None), &RuleMatch::allow("ok"));
        assert_eq!(line.split('\t').nth(2), Some("-"));
    }

    #[test]
    fn long_prompt_truncated() {
        let prompt = "x".repeat(500);
        let line = decision_line(
            HookKind::PromptGuard,
            &input(&prompt, None),
            &RuleMatch::allow("ok"),
        );
        assert_eq!(line.split('\t').nth(3).unwrap().len(), 200);
    }
}
