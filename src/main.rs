//! sparc-hooks: SPARC workflow hooks for Claude Code.
//!
//! Usage: `sparc-hooks <hook>` with the hook record as JSON on stdin.
//!
//!   - plan-gate, prompt-guard, pr-state: print `{"block": bool, "message"?: string}`
//!   - red-first: exit 0 to proceed, exit 2 (reason on stderr) to block

use std::io::Read;
use std::process::ExitCode;

use sparc_hooks::config::Config;
use sparc_hooks::eval::{self, GuardRegistry};
use sparc_hooks::guards::{HookKind, Signal};
use sparc_hooks::input::{self, HookInput};
use sparc_hooks::logging;

const USAGE: &str = "\
usage: sparc-hooks <hook>
       sparc-hooks --dump-config

hooks:
  plan-gate     block SPARC work until .claude/plan.approved exists
  prompt-guard  block dangerous instructions
  red-first     block SPARC work until .claude/tdd.red or .claude/tdd.green exists
  pr-state      block marking PRs ready for review";

/// Exit status red-first uses to block.
const BLOCK_EXIT: u8 = 2;

fn main() -> ExitCode {
    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        "--dump-config" => return dump_config(),
        _ => {}
    }

    let hook: HookKind = match arg.parse() {
        Ok(h) => h,
        Err(e) => {
            eprintln!("sparc-hooks: {e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::load();
    if config.settings.log_decisions {
        logging::init();
    }

    let hook_input = match read_input() {
        Ok(v) => v,
        Err(e) if hook.tolerates_malformed_input() => {
            log::warn!("{hook}: ignoring unreadable input: {e}");
            HookInput::default()
        }
        Err(e) => {
            eprintln!("sparc-hooks: {e}");
            return ExitCode::FAILURE;
        }
    };

    let project_root = eval::project_root(&config.settings.project_dir_env);
    let registry = GuardRegistry::from_config(&config);
    let result = registry.evaluate(hook, &hook_input, &project_root);
    logging::log_decision(hook, &hook_input, &result);

    match hook.signal() {
        Signal::Json => match serde_json::to_string(&result.to_output()) {
            Ok(line) => {
                println!("{line}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("sparc-hooks: failed to encode decision: {e}");
                ExitCode::FAILURE
            }
        },
        Signal::ExitCode => {
            if result.is_block() {
                eprintln!("{}", result.message.as_deref().unwrap_or(&result.reason));
                ExitCode::from(BLOCK_EXIT)
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn read_input() -> Result<HookInput, String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    input::parse(&raw).map_err(|e| format!("JSON parse error: {e}"))
}

fn dump_config() -> ExitCode {
    match Config::load().to_toml() {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sparc-hooks: failed to render config: {e}");
            ExitCode::FAILURE
        }
    }
}
