use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Block => "BLOCK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub decision: Decision,
    /// Why the guard decided this way; goes to the decision log.
    pub reason: String,
    /// Shown to the user when blocked.
    pub message: Option<String>,
}

impl RuleMatch {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Allow,
            reason: reason.into(),
            message: None,
        }
    }

    pub fn block(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            decision: Decision::Block,
            reason: reason.into(),
            message: Some(message.into()),
        }
    }

    pub fn is_block(&self) -> bool {
        self.decision == Decision::Block
    }

    /// The `{"block": bool, "message"?: string}` record written to stdout.
    pub fn to_output(&self) -> HookOutput<'_> {
        HookOutput {
            block: self.is_block(),
            message: self.message.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HookOutput<'a> {
    pub block: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
}
