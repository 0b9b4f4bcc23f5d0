use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub sentinels: SentinelConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub pr: PrConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Environment variable naming the project root.
    #[serde(default = "default_project_dir_env")]
    pub project_dir_env: String,
    #[serde(default)]
    pub log_decisions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_dir_env: default_project_dir_env(),
            log_decisions: false,
        }
    }
}

fn default_project_dir_env() -> String {
    "CLAUDE_PROJECT_DIR".into()
}

/// Marker substrings that classify a prompt as part of the SPARC workflow.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ContextConfig {
    #[serde(default)]
    pub markers: Vec<String>,
}

/// Workflow phase sentinel paths, relative to the project root.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SentinelConfig {
    #[serde(default)]
    pub plan_approved: String,
    #[serde(default)]
    pub tdd_red: String,
    #[serde(default)]
    pub tdd_green: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PromptConfig {
    /// Checked on every prompt.
    #[serde(default)]
    pub basic_dangerous: Vec<String>,
    /// Checked only when the prompt is in SPARC context.
    #[serde(default)]
    pub sparc_dangerous: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PrConfig {
    /// Literal fragments that indicate marking a PR ready for review.
    #[serde(default)]
    pub ready_patterns: Vec<String>,
    /// Command phrase blocked with its own message.
    #[serde(default)]
    pub ready_command: String,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    context: ContextOverlay,
    #[serde(default)]
    sentinels: SentinelsOverlay,
    #[serde(default)]
    prompt: PromptOverlay,
    #[serde(default)]
    pr: PrOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    project_dir_env: Option<String>,
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ContextOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    markers: Vec<String>,
    #[serde(default)]
    remove_markers: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct SentinelsOverlay {
    plan_approved: Option<String>,
    tdd_red: Option<String>,
    tdd_green: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PromptOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    basic_dangerous: Vec<String>,
    #[serde(default)]
    sparc_dangerous: Vec<String>,
    #[serde(default)]
    remove_basic_dangerous: Vec<String>,
    #[serde(default)]
    remove_sparc_dangerous: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PrOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    ready_patterns: Vec<String>,
    #[serde(default)]
    remove_ready_patterns: Vec<String>,
    ready_command: Option<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

fn override_scalar<T>(base: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *base = v;
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/sparc-hooks/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/sparc-hooks/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/sparc-hooks/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("sparc-hooks: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        override_scalar(&mut self.settings.project_dir_env, s.project_dir_env);
        override_scalar(&mut self.settings.log_decisions, s.log_decisions);

        let c = overlay.context;
        merge_list(
            &mut self.context.markers,
            c.markers,
            &c.remove_markers,
            c.replace,
        );

        let sn = overlay.sentinels;
        override_scalar(&mut self.sentinels.plan_approved, sn.plan_approved);
        override_scalar(&mut self.sentinels.tdd_red, sn.tdd_red);
        override_scalar(&mut self.sentinels.tdd_green, sn.tdd_green);

        let p = overlay.prompt;
        merge_list(
            &mut self.prompt.basic_dangerous,
            p.basic_dangerous,
            &p.remove_basic_dangerous,
            p.replace,
        );
        merge_list(
            &mut self.prompt.sparc_dangerous,
            p.sparc_dangerous,
            &p.remove_sparc_dangerous,
            p.replace,
        );

        let pr = overlay.pr;
        merge_list(
            &mut self.pr.ready_patterns,
            pr.ready_patterns,
            &pr.remove_ready_patterns,
            pr.replace,
        );
        override_scalar(&mut self.pr.ready_command, pr.ready_command);
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), toml::de::Error> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }

    /// Render the merged configuration as TOML (for `--dump-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
