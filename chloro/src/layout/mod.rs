//! View tree
//!
//! Display nodes a page is built from. A tree is assembled once and then only
//! read: rendered to HTML for the browser or serialized to the layout JSON a
//! Dash-style front end consumes.

pub mod render;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

pub use render::{render_document, render_html};

const HTML_NAMESPACE: &str = "dash_html_components";
const CORE_NAMESPACE: &str = "dash_core_components";

/// Inline style, keyed by camelCase CSS property name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous value for `property`
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// CSS declaration list (`background-color: white; padding: 10px`)
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{}: {}", kebab_case(property), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A node of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Container
    Div {
        children: Vec<Component>,
        style: Style,
    },
    /// Third-level heading
    H3 { children: String },
    /// Line break
    Br,
    /// Formatted text, kept as written and dedented on output
    Markdown { source: String },
}

impl Component {
    pub fn div(children: Vec<Component>) -> Self {
        Component::Div {
            children,
            style: Style::default(),
        }
    }

    pub fn styled_div(children: Vec<Component>, style: Style) -> Self {
        Component::Div { children, style }
    }

    pub fn h3(text: impl Into<String>) -> Self {
        Component::H3 {
            children: text.into(),
        }
    }

    pub fn br() -> Self {
        Component::Br
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Component::Markdown {
            source: source.into(),
        }
    }

    /// Component type name as the front end knows it
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Div { .. } => "Div",
            Component::H3 { .. } => "H3",
            Component::Br => "Br",
            Component::Markdown { .. } => "Markdown",
        }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Component::Markdown { .. } => CORE_NAMESPACE,
            _ => HTML_NAMESPACE,
        }
    }

    /// Direct children; empty for leaf nodes
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Div { children, .. } => children,
            _ => &[],
        }
    }

    /// Layout JSON: `{"type", "namespace", "props"}`
    pub fn to_json(&self) -> Value {
        let mut props = Map::new();
        match self {
            Component::Div { children, style } => {
                props.insert(
                    "children".to_string(),
                    Value::Array(children.iter().map(Component::to_json).collect()),
                );
                if !style.is_empty() {
                    props.insert("style".to_string(), json!(style));
                }
            }
            Component::H3 { children } => {
                props.insert("children".to_string(), json!(children));
            }
            Component::Br => {}
            Component::Markdown { source } => {
                props.insert("children".to_string(), json!(dedent(source)));
            }
        }

        json!({
            "type": self.kind(),
            "namespace": self.namespace(),
            "props": props,
        })
    }
}

/// Strip the whitespace prefix shared by all non-blank lines, along with
/// leading and trailing blank lines. Tabs and spaces are not interchangeable.
pub fn dedent(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .reduce(|common, next| {
            let shared = common
                .bytes()
                .zip(next.bytes())
                .take_while(|(a, b)| a == b)
                .count();
            &common[..shared]
        })
        .map_or(0, str::len);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line[indent..].trim_end()
            }
        })
        .collect();

    let start = stripped.iter().position(|l| !l.is_empty());
    let end = stripped.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => stripped[start..=end].join("\n"),
        _ => String::new(),
    }
}

fn leading_whitespace(line: &str) -> &str {
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
