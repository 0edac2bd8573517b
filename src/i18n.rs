//! Message catalogs and rich-text templates.
//!
//! Messages may embed named placeholders such as `<gh>GitHub</gh>`. They are
//! parsed into [`Segment`]s so the renderer can wrap each placeholder's children
//! in a real element instead of splicing markup into a string.

use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

pub const HEADER_NS: &str = "layout/header";
pub const DEFAULT_LOCALE: &str = "en";

const EN_HEADER: &str = include_str!("../locales/en/layout/header.json");

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(Catalog::builtin()));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("namespace {namespace} is not valid JSON: {source}")]
    Json {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("namespace {namespace} must be a JSON object")]
    NotAnObject { namespace: String },
    #[error("message {key} in {namespace} must be a string")]
    InvalidMessage { namespace: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("placeholder <{name}> is never closed")]
    Unclosed { name: String },
    #[error("expected </{expected}> but found </{found}>")]
    Mismatched { expected: String, found: String },
    #[error("closing </{name}> has no matching opening tag")]
    StrayClose { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Inline { name: String, children: Vec<Segment> },
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            namespaces: HashMap::new(),
        }
    }

    /// English messages shipped with the crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new(DEFAULT_LOCALE);
        if let Err(err) = catalog.add_namespace(HEADER_NS, EN_HEADER) {
            tracing::error!(error = %err, "failed to load built-in messages");
        }
        catalog
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Loads a JSON namespace. Nested objects become dotted keys, so
    /// `{"a": {"b": "x"}}` defines `a.b`.
    pub fn add_namespace(&mut self, namespace: &str, json: &str) -> Result<(), CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(|source| CatalogError::Json {
            namespace: namespace.to_string(),
            source,
        })?;
        let Value::Object(_) = value else {
            return Err(CatalogError::NotAnObject {
                namespace: namespace.to_string(),
            });
        };

        let mut messages = HashMap::new();
        flatten(namespace, "", &value, &mut messages)?;
        tracing::debug!(
            locale = %self.locale,
            namespace,
            count = messages.len(),
            "loaded message namespace"
        );
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .extend(messages);
        Ok(())
    }

    pub fn lookup(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// Plain-text message, or the key itself when it is missing.
    pub fn text(&self, namespace: &str, key: &str) -> String {
        match self.lookup(namespace, key) {
            Some(message) => message.to_string(),
            None => {
                tracing::warn!(namespace, key, locale = %self.locale, "missing message");
                key.to_string()
            }
        }
    }

    /// Resolves `key` into renderable segments. A missing key renders as the
    /// key and a malformed template renders verbatim.
    pub fn resolve(&self, namespace: &str, key: &str) -> Vec<Segment> {
        let Some(template) = self.lookup(namespace, key) else {
            tracing::warn!(namespace, key, locale = %self.locale, "missing message");
            return vec![Segment::Text(key.to_string())];
        };
        match parse_template(template) {
            Ok(segments) => segments,
            Err(err) => {
                tracing::warn!(namespace, key, error = %err, "malformed message template");
                vec![Segment::Text(template.to_string())]
            }
        }
    }
}

fn flatten(
    namespace: &str,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(namespace, &path, child, out)?;
            }
            Ok(())
        }
        Value::String(message) => {
            out.insert(prefix.to_string(), message.clone());
            Ok(())
        }
        _ => Err(CatalogError::InvalidMessage {
            namespace: namespace.to_string(),
            key: prefix.to_string(),
        }),
    }
}

enum Tag<'a> {
    Open(&'a str),
    Close(&'a str),
    SelfClosing(&'a str),
}

/// Reads a tag at the start of `input` (which begins with `<`). Returns
/// `None` when the text is not a placeholder tag, e.g. a bare `<` in prose.
fn read_tag(input: &str) -> Option<(Tag<'_>, usize)> {
    let end = input.find('>')?;
    let inner = &input[1..end];
    let (tag, name) = if let Some(name) = inner.strip_prefix('/') {
        (Tag::Close(name), name)
    } else if let Some(name) = inner.strip_suffix('/') {
        let name = name.trim_end();
        (Tag::SelfClosing(name), name)
    } else {
        (Tag::Open(inner), inner)
    };
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then_some((tag, end + 1))
}

fn flush_text(text: &mut String, out: &mut Vec<Segment>) {
    if !text.is_empty() {
        out.push(Segment::Text(std::mem::take(text)));
    }
}

pub fn parse_template(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut stack: Vec<(String, Vec<Segment>)> = Vec::new();
    let mut current = Vec::new();
    let mut text = String::new();
    let mut rest = template;

    while let Some(pos) = rest.find('<') {
        text.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let Some((tag, len)) = read_tag(tail) else {
            text.push('<');
            rest = &tail[1..];
            continue;
        };
        flush_text(&mut text, &mut current);
        match tag {
            Tag::Open(name) => {
                stack.push((name.to_string(), std::mem::take(&mut current)));
            }
            Tag::Close(name) => {
                let Some((open, parent)) = stack.pop() else {
                    return Err(TemplateError::StrayClose {
                        name: name.to_string(),
                    });
                };
                if open != name {
                    return Err(TemplateError::Mismatched {
                        expected: open,
                        found: name.to_string(),
                    });
                }
                let children = std::mem::replace(&mut current, parent);
                current.push(Segment::Inline {
                    name: open,
                    children,
                });
            }
            Tag::SelfClosing(name) => current.push(Segment::Inline {
                name: name.to_string(),
                children: Vec::new(),
            }),
        }
        rest = &tail[len..];
    }
    text.push_str(rest);
    flush_text(&mut text, &mut current);

    match stack.pop() {
        Some((name, _)) => Err(TemplateError::Unclosed { name }),
        None => Ok(current),
    }
}

#[derive(Clone)]
struct I18n(Arc<Catalog>);

pub fn provide_i18n(catalog: Catalog) {
    provide_context(I18n(Arc::new(catalog)));
}

/// The catalog provided by an ancestor, or the built-in English one.
pub fn use_i18n() -> Arc<Catalog> {
    use_context::<I18n>()
        .map(|I18n(catalog)| catalog)
        .unwrap_or_else(|| BUILTIN.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    fn inline(name: &str, children: Vec<Segment>) -> Segment {
        Segment::Inline {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn parses_inline_placeholders() {
        let segments = parse_template("Report on <gh>GitHub</gh> or <dc>Discord</dc>.").unwrap();
        assert_eq!(
            segments,
            vec![
                text("Report on "),
                inline("gh", vec![text("GitHub")]),
                text(" or "),
                inline("dc", vec![text("Discord")]),
                text("."),
            ]
        );
    }

    #[test]
    fn parses_nested_and_self_closing_tags() {
        let segments = parse_template("<a>x <b>y</b></a><br/>").unwrap();
        assert_eq!(
            segments,
            vec![
                inline("a", vec![text("x "), inline("b", vec![text("y")])]),
                inline("br", vec![]),
            ]
        );
    }

    #[test]
    fn keeps_bare_angle_brackets_as_text() {
        let segments = parse_template("1 < 2 and <not a tag>").unwrap();
        assert_eq!(segments, vec![text("1 < 2 and <not a tag>")]);
    }

    #[test]
    fn reports_malformed_templates() {
        assert_eq!(
            parse_template("<gh>open"),
            Err(TemplateError::Unclosed {
                name: "gh".to_string()
            })
        );
        assert_eq!(
            parse_template("<gh>x</dc>"),
            Err(TemplateError::Mismatched {
                expected: "gh".to_string(),
                found: "dc".to_string()
            })
        );
        assert_eq!(
            parse_template("x</gh>"),
            Err(TemplateError::StrayClose {
                name: "gh".to_string()
            })
        );
    }

    #[test]
    fn builtin_catalog_has_experimental_note() {
        let catalog = Catalog::builtin();
        let segments = catalog.resolve(HEADER_NS, "experimentalNote.label");
        let names: Vec<_> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Inline { name, .. } => Some(name.as_str()),
                Segment::Text(_) => None,
            })
            .collect();
        assert_eq!(names, vec!["gh", "dc"]);
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve(HEADER_NS, "nope.label"), vec![text("nope.label")]);
        assert_eq!(catalog.text("other/ns", "search.placeholder"), "search.placeholder");
    }

    #[test]
    fn malformed_message_renders_verbatim() {
        let mut catalog = Catalog::new("en");
        catalog
            .add_namespace("test", r#"{"broken": "see <gh>here"}"#)
            .unwrap();
        assert_eq!(catalog.resolve("test", "broken"), vec![text("see <gh>here")]);
    }

    #[test]
    fn rejects_non_string_messages() {
        let mut catalog = Catalog::new("en");
        let err = catalog
            .add_namespace("test", r#"{"a": {"b": 3}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidMessage { key, .. } if key == "a.b"));
        assert!(matches!(
            catalog.add_namespace("test", "[]"),
            Err(CatalogError::NotAnObject { .. })
        ));
        assert!(matches!(
            catalog.add_namespace("test", "{"),
            Err(CatalogError::Json { .. })
        ));
    }

    #[test]
    fn later_namespaces_extend_earlier_ones() {
        let mut catalog = Catalog::new("de");
        catalog.add_namespace("ns", r#"{"a": "1"}"#).unwrap();
        catalog.add_namespace("ns", r#"{"b": "2"}"#).unwrap();
        assert_eq!(catalog.lookup("ns", "a"), Some("1"));
        assert_eq!(catalog.lookup("ns", "b"), Some("2"));
        assert_eq!(catalog.locale(), "de");
    }
}
