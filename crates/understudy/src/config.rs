//! Stage configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How focus requests interact with other focused nodes in the same tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPolicy {
    /// Each node tracks focus on its own. Several nodes in one tree may report
    /// focus at once, as the platform shadow this crate simulates allows.
    #[default]
    Independent,
    /// A focus request first clears focus everywhere else in the tree.
    Single,
}

/// Options for a [`Stage`](crate::Stage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Focus policy.
    pub focus_policy: FocusPolicy,
    /// Spaces added per nesting level in diagnostic dumps.
    pub dump_indent: usize,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            focus_policy: FocusPolicy::Independent,
            dump_indent: 2,
        }
    }
}

impl StageConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Replace the focus policy.
    pub fn focus_policy(mut self, policy: FocusPolicy) -> Self {
        self.focus_policy = policy;
        self
    }

    /// Replace the dump indent step.
    pub fn dump_indent(mut self, indent: usize) -> Self {
        self.dump_indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn json() -> Result<()> {
        assert_eq!(StageConfig::from_json("{}")?, StageConfig::default());
        let c = StageConfig::from_json(r#"{"focus_policy": "single"}"#)?;
        assert_eq!(c.focus_policy, FocusPolicy::Single);
        assert_eq!(c.dump_indent, 2);
        let c = StageConfig::from_json(r#"{"dump_indent": 4}"#)?;
        assert_eq!(c, StageConfig::default().dump_indent(4));
        Ok(())
    }

    #[test]
    fn json_errors() {
        assert!(matches!(
            StageConfig::from_json(r#"{"focus_policy": "first"}"#),
            Err(Error::Config(_))
        ));
    }
}
