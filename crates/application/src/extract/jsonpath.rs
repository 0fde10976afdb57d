//! A small JSONPath subset.
//!
//! Supported syntax:
//! - `$` the root; a query without it is read from the root, so `token`
//!   means `$.token` and `[0]` means `$[0]`
//! - `.name` and `['name']` / `["name"]` member access
//! - `[0]`, `[-1]` array index (negative counts from the end)
//! - `.*` and `[*]` every member or element
//! - `..name`, `..*`, `..[0]` recursive descent

use serde_json::Value;
use thiserror::Error;

/// Errors raised while parsing a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonPathError {
    /// The query is empty.
    #[error("empty JSON path")]
    Empty,

    /// A `.` is not followed by a member name.
    #[error("empty member name at offset {0}")]
    EmptyName(usize),

    /// A `[` has no matching `]`.
    #[error("unclosed bracket at offset {0}")]
    UnclosedBracket(usize),

    /// Bracket content is neither an index, a quoted name nor `*`.
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    /// A character that cannot start a segment.
    #[error("unexpected '{ch}' at offset {offset}")]
    Unexpected {
        /// The offending character.
        ch: char,
        /// Byte offset in the query.
        offset: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Name(String),
    Index(i64),
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    recursive: bool,
    selector: Selector,
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parses a query.
    ///
    /// Error offsets count from the rooted form of the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is not in the supported subset.
    pub fn parse(path: &str) -> Result<Self, JsonPathError> {
        let path = path.trim();
        let rooted;
        let path = if path.is_empty() {
            return Err(JsonPathError::Empty);
        } else if path.starts_with('$') {
            path
        } else if path.starts_with(['.', '[']) {
            rooted = format!("${path}");
            rooted.as_str()
        } else {
            rooted = format!("$.{path}");
            rooted.as_str()
        };
        let rest = &path[1..];
        let base = 1;
        let bytes = rest.as_bytes();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let mut recursive = false;
            match bytes[i] {
                b'.' => {
                    i += 1;
                    if bytes.get(i) == Some(&b'.') {
                        recursive = true;
                        i += 1;
                    }
                    match bytes.get(i) {
                        Some(b'[') => {
                            let (selector, next) = parse_bracket(rest, i, base)?;
                            segments.push(Segment { recursive, selector });
                            i = next;
                        }
                        Some(b'*') => {
                            segments.push(Segment {
                                recursive,
                                selector: Selector::Wildcard,
                            });
                            i += 1;
                        }
                        _ => {
                            let end = rest[i..]
                                .find(['.', '['])
                                .map_or(rest.len(), |offset| i + offset);
                            let name = &rest[i..end];
                            if name.is_empty() {
                                return Err(JsonPathError::EmptyName(base + i));
                            }
                            segments.push(Segment {
                                recursive,
                                selector: Selector::Name(name.to_string()),
                            });
                            i = end;
                        }
                    }
                }
                b'[' => {
                    let (selector, next) = parse_bracket(rest, i, base)?;
                    segments.push(Segment { recursive, selector });
                    i = next;
                }
                _ => {
                    let ch = rest[i..].chars().next().unwrap_or('?');
                    return Err(JsonPathError::Unexpected {
                        ch,
                        offset: base + i,
                    });
                }
            }
        }

        Ok(Self { segments })
    }

    /// Returns a copy whose member names are lower-cased.
    ///
    /// Used for header maps, whose keys arrive lower-cased from the transport.
    #[must_use]
    pub fn with_lowercase_names(&self) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|segment| Segment {
                recursive: segment.recursive,
                selector: match &segment.selector {
                    Selector::Name(name) => Selector::Name(name.to_lowercase()),
                    other => other.clone(),
                },
            })
            .collect();
        Self { segments }
    }

    /// Returns every value the query matches, in document order.
    #[must_use]
    pub fn select<'v>(&self, root: &'v Value) -> Vec<&'v Value> {
        let mut current = vec![root];

        for segment in &self.segments {
            let mut next = Vec::new();
            for value in current {
                if segment.recursive {
                    let mut nodes = Vec::new();
                    collect_descendants(value, &mut nodes);
                    for node in nodes {
                        apply(&segment.selector, node, &mut next);
                    }
                } else {
                    apply(&segment.selector, value, &mut next);
                }
            }
            current = next;
        }

        current
    }

    /// Evaluates the query with single-match unwrapping.
    ///
    /// No match yields `None`, exactly one match yields that value, and
    /// several matches yield them as an array.
    #[must_use]
    pub fn query(&self, root: &Value) -> Option<Value> {
        let mut matches = self.select(root);
        match matches.len() {
            0 => None,
            1 => matches.pop().cloned(),
            _ => Some(Value::Array(matches.into_iter().cloned().collect())),
        }
    }
}

/// Parses `[...]` starting at `open`; returns the selector and the index after `]`.
fn parse_bracket(rest: &str, open: usize, base: usize) -> Result<(Selector, usize), JsonPathError> {
    let inner_start = open + 1;
    let bytes = rest.as_bytes();

    let quote = bytes.get(inner_start).copied().filter(|b| *b == b'\'' || *b == b'"');
    if let Some(quote) = quote {
        let name_start = inner_start + 1;
        let close_quote = rest[name_start..]
            .find(char::from(quote))
            .map(|offset| name_start + offset)
            .ok_or(JsonPathError::UnclosedBracket(base + open))?;
        if bytes.get(close_quote + 1) != Some(&b']') {
            return Err(JsonPathError::UnclosedBracket(base + open));
        }
        let name = rest[name_start..close_quote].to_string();
        return Ok((Selector::Name(name), close_quote + 2));
    }

    let close = rest[inner_start..]
        .find(']')
        .map(|offset| inner_start + offset)
        .ok_or(JsonPathError::UnclosedBracket(base + open))?;
    let content = rest[inner_start..close].trim();

    let selector = if content == "*" {
        Selector::Wildcard
    } else {
        content
            .parse::<i64>()
            .map(Selector::Index)
            .map_err(|_| JsonPathError::InvalidSelector(content.to_string()))?
    };
    Ok((selector, close + 1))
}

fn apply<'v>(selector: &Selector, value: &'v Value, out: &mut Vec<&'v Value>) {
    match (selector, value) {
        (Selector::Name(name), Value::Object(map)) => {
            if let Some(found) = map.get(name) {
                out.push(found);
            }
        }
        (Selector::Index(index), Value::Array(items)) => {
            let resolved = if *index < 0 {
                i64::try_from(items.len()).ok().map(|len| len + index)
            } else {
                Some(*index)
            };
            if let Some(found) = resolved
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| items.get(i))
            {
                out.push(found);
            }
        }
        (Selector::Wildcard, Value::Object(map)) => out.extend(map.values()),
        (Selector::Wildcard, Value::Array(items)) => out.extend(items.iter()),
        _ => {}
    }
}

/// Pre-order walk including the node itself.
fn collect_descendants<'v>(value: &'v Value, out: &mut Vec<&'v Value>) {
    out.push(value);
    match value {
        Value::Object(map) => map.values().for_each(|child| collect_descendants(child, out)),
        Value::Array(items) => items.iter().for_each(|child| collect_descendants(child, out)),
        _ => {}
    }
}
