//! Output format selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON envelope per command
    Json,
}

impl OutputFormat {
    /// `--json` wins over the configured format.
    pub fn from_flag(json: bool, configured: OutputFormat) -> Self {
        if json { Self::Json } else { configured }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_config() {
        assert_eq!(OutputFormat::from_flag(true, OutputFormat::Text), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag(false, OutputFormat::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag(false, OutputFormat::Text), OutputFormat::Text);
    }
}
