//! Token parser for `{{name}}` syntax
//!
//! Finds token references with their byte positions. Names are taken
//! literally: `{{ name }}` refers to a variable called ` name `.

use std::ops::Range;

/// A `{{name}}` reference found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateToken {
    /// The text between the braces.
    pub name: String,

    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
}

/// Parses a template and returns every token in order of appearance.
///
/// Extra opening braces are treated as literal text, so `{{{id}}}` holds the
/// token `{{id}}` surrounded by single braces. An opener without a matching
/// `}}` ends the scan.
///
/// # Examples
///
/// ```
/// use sequent_application::template::parse_tokens;
///
/// let tokens = parse_tokens("Bearer {{token}} for {{user}}");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].name, "token");
/// assert_eq!(tokens[1].name, "user");
/// ```
#[must_use]
pub fn parse_tokens(input: &str) -> Vec<TemplateToken> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find("{{") {
        let mut start = cursor + offset;
        while bytes.get(start + 2) == Some(&b'{') {
            start += 1;
        }

        let Some(close) = input[start + 2..].find("}}") else {
            break;
        };
        let close = start + 2 + close;

        // `{{a {{b}}` refers to `b`; the first opener is plain text.
        if let Some(inner) = input[start + 2..close].rfind("{{") {
            start = start + 2 + inner;
        }

        let name = &input[start + 2..close];
        if !name.is_empty() {
            tokens.push(TemplateToken {
                name: name.to_string(),
                span: start..close + 2,
            });
        }
        cursor = close + 2;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(input: &str) -> Vec<String> {
        parse_tokens(input).into_iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_parse_simple_token() {
        let tokens = parse_tokens("{{name}}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "name");
        assert_eq!(tokens[0].span, 0..8);
    }

    #[test]
    fn test_parse_multiple_tokens() {
        assert_eq!(
            names("{{base}}/api/{{version}}/users/{{id}}"),
            vec!["base", "version", "id"]
        );
    }

    #[test]
    fn test_names_are_literal() {
        assert_eq!(names("{{ name }}"), vec![" name "]);
    }

    #[test]
    fn test_no_tokens() {
        assert!(parse_tokens("Hello, World!").is_empty());
        assert!(parse_tokens("{single}").is_empty());
        assert!(parse_tokens("{{unclosed").is_empty());
    }

    #[test]
    fn test_empty_token_skipped() {
        assert!(parse_tokens("{{}}").is_empty());
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(names("{{a}}{{b}}{{c}}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_token_in_json() {
        assert_eq!(
            names(r#"{"user": "{{user}}", "id": {{id}}}"#),
            vec!["user", "id"]
        );
    }

    #[test]
    fn test_extra_braces() {
        let input = "{{{id}}}";
        let tokens = parse_tokens(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "id");
        assert_eq!(&input[tokens[0].span.clone()], "{{id}}");
    }

    #[test]
    fn test_nested_opener() {
        let input = "{{a {{b}}";
        let tokens = parse_tokens(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "b");
        assert_eq!(&input[tokens[0].span.clone()], "{{b}}");
    }

    #[test]
    fn test_span_positions() {
        let input = "Hello {{name}}, welcome!";
        let tokens = parse_tokens(input);
        assert_eq!(&input[tokens[0].span.clone()], "{{name}}");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(names("héllo {{wörld}} ✓"), vec!["wörld"]);
    }
}
