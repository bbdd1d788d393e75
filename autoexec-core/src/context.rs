//! # Dispatch Context
//!
//! What a single dispatch pass reads from the document: the root element's
//! identifier and its class tokens. Building the context is the caller's job;
//! the dispatcher never touches markup itself.

/// The root element a dispatch pass is driven by.
///
/// Implement this for whatever represents the document root in your host
/// (a parsed HTML node, a DOM handle, a test double).
pub trait Element {
    /// The identifier attribute. Empty when absent.
    fn id(&self) -> &str;

    /// The raw, whitespace-separated class attribute. Empty when absent.
    fn class_name(&self) -> &str;
}

/// A plain owned [`Element`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticElement {
    /// Identifier attribute.
    pub id: String,
    /// Class attribute.
    pub class_name: String,
}

impl StaticElement {
    /// Create an element from its two attributes.
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
        }
    }
}

impl Element for StaticElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Inputs for one dispatch pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Page identifier. Empty means no page phase.
    pub page_id: String,
    /// Behavior tokens in markup order. May contain empty strings.
    pub behavior_tokens: Vec<String>,
}

impl DispatchContext {
    /// Build a context from an id and already-split tokens.
    pub fn new<I, S>(page_id: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            page_id: page_id.into(),
            behavior_tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a context from raw attribute values.
    ///
    /// The class attribute is split on runs of whitespace. Leading or trailing
    /// whitespace yields one empty token at that edge, and an empty attribute
    /// yields a single empty token. The dispatcher skips those.
    pub fn from_markup(id: &str, class_name: &str) -> Self {
        Self {
            page_id: id.to_string(),
            behavior_tokens: split_class_list(class_name),
        }
    }

    /// Build a context from a root element.
    pub fn from_element<E: Element + ?Sized>(element: &E) -> Self {
        Self::from_markup(element.id(), element.class_name())
    }
}

fn split_class_list(class_name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    if class_name.starts_with(char::is_whitespace) {
        tokens.push(String::new());
    }
    tokens.extend(class_name.split_whitespace().map(str::to_string));
    if class_name.is_empty() || class_name.ends_with(char::is_whitespace) {
        tokens.push(String::new());
    }
    tokens
}
