use std::path::Path;

use crate::input::HookInput;

/// Context for evaluating a single hook request.
#[derive(Debug)]
pub struct RequestContext<'a> {
    /// Lowercased prompt, the form every guard matches against.
    pub prompt: String,
    /// Whether the prompt belongs to the SPARC workflow.
    pub in_scope: bool,
    /// Directory sentinel paths are resolved against.
    pub project_root: &'a Path,
}

impl<'a> RequestContext<'a> {
    pub fn new(input: &HookInput, in_scope: bool, project_root: &'a Path) -> Self {
        Self {
            prompt: input.prompt().to_lowercase(),
            in_scope,
            project_root,
        }
    }

    /// Check whether a sentinel file exists under the project root.
    pub fn sentinel_exists(&self, relative: &str) -> bool {
        !relative.is_empty() && self.project_root.join(relative).exists()
    }

    /// Return the first pattern contained in the lowercased prompt.
    pub fn first_match<'p>(&self, patterns: &'p [String]) -> Option<&'p str> {
        patterns
            .iter()
            .find(|p| self.prompt.contains(p.as_str()))
            .map(String::as_str)
    }
}
