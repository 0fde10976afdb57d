//! Extraction instructions.
//!
//! A test case may carry an instruction document of the form
//! `{"extract": {"from": "body" | "header", "path": "$.token", "as": "token"}}`.
//! The document is parsed once per step into an [`InstructionParse`] so that
//! "nothing to do" and "could not understand" are values, not errors.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Which part of a response an extraction reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractSource {
    /// The parsed response body.
    #[default]
    Body,
    /// The response header map.
    #[serde(alias = "headers")]
    Header,
}

/// A rule binding one value of a response to a run variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionInstruction {
    /// Where to read from; defaults to the body.
    #[serde(default, rename = "from")]
    pub source: ExtractSource,
    /// JSONPath-style query evaluated against the source.
    pub path: String,
    /// Variable name the result is bound to.
    #[serde(rename = "as")]
    pub variable: String,
}

/// Outcome of reading a test case's instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionParse {
    /// No instruction, or a document without an `extract` rule.
    Absent,
    /// The document could not be understood; extraction is skipped.
    Malformed(DomainError),
    /// A usable extraction rule.
    Extract(ExtractionInstruction),
}

impl InstructionParse {
    /// Parses optional instruction text.
    #[must_use]
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Absent;
        };

        let document: serde_json::Value = match serde_json::from_str(text) {
            Ok(document) => document,
            Err(e) => return Self::Malformed(DomainError::InvalidInstruction(e.to_string())),
        };

        let extract = match document.get("extract") {
            None | Some(serde_json::Value::Null) => return Self::Absent,
            Some(extract) => extract.clone(),
        };

        match serde_json::from_value::<ExtractionInstruction>(extract) {
            Ok(rule) if rule.path.trim().is_empty() => {
                Self::Malformed(DomainError::InvalidInstruction("empty path".to_string()))
            }
            Ok(rule) if rule.variable.trim().is_empty() => Self::Malformed(
                DomainError::InvalidInstruction("empty variable name".to_string()),
            ),
            Ok(rule) => Self::Extract(rule),
            Err(e) => Self::Malformed(DomainError::InvalidInstruction(e.to_string())),
        }
    }

    /// Returns the extraction rule, if any.
    #[must_use]
    pub const fn rule(&self) -> Option<&ExtractionInstruction> {
        match self {
            Self::Extract(rule) => Some(rule),
            _ => None,
        }
    }
}
