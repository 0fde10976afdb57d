//! Extraction of response values into the variable store.

use sequent_domain::{
    ExtractSource, ExtractionOutcome, InstructionParse, VariableStore, response::ResponseSpec,
};
use tracing::{debug, warn};

use super::jsonpath::JsonPath;

/// Applies a step's instruction to its response.
///
/// At most one value is bound. Nothing here can fail the step: malformed
/// instructions and queries that match nothing are logged and reported in
/// the returned outcome, and the store is left unchanged.
pub fn extract_value(
    instruction: &InstructionParse,
    response: &ResponseSpec,
    store: &mut VariableStore,
) -> ExtractionOutcome {
    let rule = match instruction {
        InstructionParse::Absent => return ExtractionOutcome::NotRequested,
        InstructionParse::Malformed(error) => {
            warn!(%error, "Ignoring malformed extraction instruction");
            return ExtractionOutcome::Malformed {
                reason: error.to_string(),
            };
        }
        InstructionParse::Extract(rule) => rule,
    };

    let path = match JsonPath::parse(&rule.path) {
        Ok(path) => path,
        Err(error) => {
            warn!(path = %rule.path, %error, "Ignoring invalid extraction path");
            return ExtractionOutcome::Malformed {
                reason: error.to_string(),
            };
        }
    };

    let (source, path) = match rule.source {
        ExtractSource::Body => (response.body.to_json(), path),
        ExtractSource::Header => (response.headers.to_json(), path.with_lowercase_names()),
    };

    match path.query(&source) {
        Some(value) => {
            debug!(variable = %rule.variable, path = %rule.path, "Extracted variable");
            store.bind(rule.variable.clone(), value);
            ExtractionOutcome::Bound {
                variable: rule.variable.clone(),
            }
        }
        None => {
            debug!(path = %rule.path, source = ?rule.source, "Extraction matched nothing");
            ExtractionOutcome::NoMatch {
                path: rule.path.clone(),
            }
        }
    }
}
