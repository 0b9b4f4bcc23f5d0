use crate::config::ContextConfig;

/// Decides whether a prompt belongs to the SPARC workflow.
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    markers: Vec<String>,
}

impl ContextClassifier {
    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            markers: super::non_empty(&config.markers),
        }
    }

    /// True if any marker is a substring of the lowercased prompt.
    pub fn is_sparc(&self, prompt: &str) -> bool {
        let prompt = prompt.to_lowercase();
        self.markers.iter().any(|m| prompt.contains(m.as_str()))
    }
}
