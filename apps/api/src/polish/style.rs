use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;

/// Single-win rewrite variant. Stored on the win as `polish_style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Resume,
    Review,
    Linkedin,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Resume => "resume",
            Style::Review => "review",
            Style::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resume" => Ok(Style::Resume),
            "review" => Ok(Style::Review),
            "linkedin" => Ok(Style::Linkedin),
            other => Err(LlmError::InvalidInput(format!(
                "unknown style '{other}' (expected resume, review or linkedin)"
            ))),
        }
    }
}

/// Batch export variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Resume,
    Review,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Resume => "resume",
            ExportFormat::Review => "review",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resume" => Ok(ExportFormat::Resume),
            "review" => Ok(ExportFormat::Review),
            other => Err(LlmError::InvalidInput(format!(
                "unknown export format '{other}' (expected resume or review)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parses_known_values() {
        assert_eq!("resume".parse::<Style>().unwrap(), Style::Resume);
        assert_eq!("review".parse::<Style>().unwrap(), Style::Review);
        assert_eq!("linkedin".parse::<Style>().unwrap(), Style::Linkedin);
    }

    #[test]
    fn test_style_rejects_unknown_value_as_invalid_input() {
        let err = "tweet".parse::<Style>().unwrap_err();
        assert!(matches!(err, LlmError::InvalidInput(_)));
        assert!(err.to_string().contains("tweet"));
    }

    #[test]
    fn test_style_display_matches_stored_tag() {
        for style in [Style::Resume, Style::Review, Style::Linkedin] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_export_format_has_no_linkedin_variant() {
        assert!("linkedin".parse::<ExportFormat>().is_err());
        assert_eq!(
            "review".parse::<ExportFormat>().unwrap(),
            ExportFormat::Review
        );
    }

    #[test]
    fn test_style_serde_lowercase() {
        let style: Style = serde_json::from_str(r#""linkedin""#).unwrap();
        assert_eq!(style, Style::Linkedin);
        assert_eq!(serde_json::to_string(&Style::Resume).unwrap(), r#""resume""#);
    }
}
