//! Template interpolation engine

use sequent_domain::VariableStore;

use super::parser::parse_tokens;

/// Result of interpolating one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// The template with every bound token substituted.
    pub resolved: String,

    /// Token names that had no binding and were left in place.
    pub unresolved: Vec<String>,
}

impl Interpolation {
    fn unchanged(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            unresolved: Vec::new(),
        }
    }

    /// Returns true if every token was resolved.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Substitutes `{{name}}` tokens using a borrowed variable store.
///
/// Unbound tokens are not an error; they stay verbatim in the output.
/// Substituted values are never scanned again, so a value that itself
/// contains `{{...}}` is inserted as-is.
#[derive(Debug, Clone, Copy)]
pub struct TemplateInterpolator<'a> {
    store: &'a VariableStore,
}

impl<'a> TemplateInterpolator<'a> {
    /// Creates an interpolator over the store's current bindings.
    #[must_use]
    pub const fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Interpolates a template.
    #[must_use]
    pub fn interpolate(&self, input: &str) -> Interpolation {
        let tokens = parse_tokens(input);
        if tokens.is_empty() {
            return Interpolation::unchanged(input);
        }

        let mut resolved = String::with_capacity(input.len());
        let mut unresolved = Vec::new();
        let mut last_end = 0;

        for token in &tokens {
            resolved.push_str(&input[last_end..token.span.start]);

            if let Some(value) = self.store.get_string(&token.name) {
                resolved.push_str(&value);
            } else {
                resolved.push_str(&input[token.span.clone()]);
                if !unresolved.contains(&token.name) {
                    unresolved.push(token.name.clone());
                }
            }

            last_end = token.span.end;
        }

        resolved.push_str(&input[last_end..]);

        Interpolation {
            resolved,
            unresolved,
        }
    }

    /// Interpolates an optional template.
    #[must_use]
    pub fn interpolate_opt(&self, input: Option<&str>) -> Option<Interpolation> {
        input.map(|text| self.interpolate(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn store() -> VariableStore {
        let mut store = VariableStore::new();
        store.bind("authToken", json!("abc123"));
        store.bind("userId", json!(42));
        store.bind("base", json!("http://localhost:3000"));
        store
    }

    #[test]
    fn test_no_tokens() {
        let store = store();
        let result = TemplateInterpolator::new(&store).interpolate("Hello, World!");
        assert_eq!(result.resolved, "Hello, World!");
        assert!(result.is_complete());
    }

    #[test]
    fn test_header_line() {
        let store = store();
        let result =
            TemplateInterpolator::new(&store).interpolate("Authorization: Bearer {{authToken}}");
        assert_eq!(result.resolved, "Authorization: Bearer abc123");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let store = store();
        let result = TemplateInterpolator::new(&store).interpolate("{{userId}}-{{userId}}-{{userId}}");
        assert_eq!(result.resolved, "42-42-42");
    }

    #[test]
    fn test_unresolved_passthrough() {
        let store = store();
        let result = TemplateInterpolator::new(&store).interpolate("{{base}}/users/{{missing}}?again={{missing}}");

        assert_eq!(
            result.resolved,
            "http://localhost:3000/users/{{missing}}?again={{missing}}"
        );
        assert_eq!(result.unresolved, vec!["missing"]);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_empty_store_leaves_template() {
        let store = VariableStore::new();
        let template = r#"{"token": "{{authToken}}"}"#;
        let result = TemplateInterpolator::new(&store).interpolate(template);
        assert_eq!(result.resolved, template);
    }

    #[test]
    fn test_structured_value_rendered_as_json() {
        let mut store = VariableStore::new();
        store.bind("user", json!({"id": 1}));
        let result = TemplateInterpolator::new(&store).interpolate(r#"{"owner": {{user}}}"#);
        assert_eq!(result.resolved, r#"{"owner": {"id":1}}"#);
    }

    #[test]
    fn test_value_is_not_rescanned() {
        let mut store = VariableStore::new();
        store.bind("a", json!("{{b}}"));
        store.bind("b", json!("nope"));
        let result = TemplateInterpolator::new(&store).interpolate("{{a}}");
        assert_eq!(result.resolved, "{{b}}");
    }

    #[test]
    fn test_interpolate_opt() {
        let store = store();
        let interpolator = TemplateInterpolator::new(&store);
        assert_eq!(interpolator.interpolate_opt(None), None);
        assert_eq!(
            interpolator
                .interpolate_opt(Some("{{userId}}"))
                .map(|i| i.resolved),
            Some("42".to_string())
        );
    }
}
