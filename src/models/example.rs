use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A code snippet illustrating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub label: ExampleLabel,
    /// Verbatim code, rendered as-is.
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Example {
    pub fn preferred(code: impl Into<String>) -> Self {
        Self {
            label: ExampleLabel::Preferred,
            code: code.into(),
            caption: None,
        }
    }

    pub fn discouraged(code: impl Into<String>) -> Self {
        Self {
            label: ExampleLabel::Discouraged,
            code: code.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn is_preferred(&self) -> bool {
        self.label == ExampleLabel::Preferred
    }
}

/// Whether an example shows the style to follow or the style to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleLabel {
    Preferred,
    Discouraged,
}

impl ExampleLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::Discouraged => "discouraged",
        }
    }
}

impl fmt::Display for ExampleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExampleLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preferred" => Ok(Self::Preferred),
            "discouraged" => Ok(Self::Discouraged),
            _ => Err(format!("Invalid example label: {}", s)),
        }
    }
}
