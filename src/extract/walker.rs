//! Depth-first JSON walker and the searches built on it
//!
//! The walk keeps its own stack of child iterators instead of recursing, so
//! arbitrarily deep responses cannot overflow the call stack.

use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// Key marking a timeline cursor entry
const CURSOR_TYPE_KEY: &str = "cursorType";

/// Cursor type pointing at older entries
const BOTTOM_CURSOR: &str = "Bottom";

/// Key holding the cursor token
const CURSOR_VALUE_KEY: &str = "value";

/// A JSON node, tagged by shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// Key/value mapping, in document order
    Object(&'a JsonObject),
    /// Ordered sequence
    Array(&'a [JsonValue]),
    /// String, number, bool or null
    Scalar(&'a JsonValue),
}

impl<'a> Node<'a> {
    /// Classify a JSON value
    pub fn of(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => Node::Object(map),
            JsonValue::Array(items) => Node::Array(items),
            _ => Node::Scalar(value),
        }
    }
}

/// Children still to visit for one container
enum Frame<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(std::slice::Iter<'a, JsonValue>),
}

/// Pre-order, left-to-right iterator over every node of a JSON tree.
///
/// Yields the key the node is stored under (`None` for the root and for
/// array items) together with the node.
pub struct Walk<'a> {
    root: Option<&'a JsonValue>,
    stack: Vec<Frame<'a>>,
}

impl<'a> Walk<'a> {
    fn descend(&mut self, value: &'a JsonValue) {
        match Node::of(value) {
            Node::Object(map) => self.stack.push(Frame::Object(map.iter())),
            Node::Array(items) => self.stack.push(Frame::Array(items.iter())),
            Node::Scalar(_) => {}
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Option<&'a str>, &'a JsonValue);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.descend(root);
            return Some((None, root));
        }

        loop {
            let next = match self.stack.last_mut()? {
                Frame::Object(entries) => entries.next().map(|(k, v)| (Some(k.as_str()), v)),
                Frame::Array(items) => items.next().map(|v| (None, v)),
            };

            match next {
                Some((key, value)) => {
                    self.descend(value);
                    return Some((key, value));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Walk every node of `tree`, root first
pub fn walk(tree: &JsonValue) -> Walk<'_> {
    Walk {
        root: Some(tree),
        stack: Vec::new(),
    }
}

/// Every value stored under `key` in any object of `tree`, in pre-order.
///
/// Matches nested inside a matched value are collected too.
pub fn collect_by_key<'a>(tree: &'a JsonValue, key: &str) -> Vec<&'a JsonValue> {
    walk(tree)
        .filter(|(k, _)| *k == Some(key))
        .map(|(_, value)| value)
        .collect()
}

/// String values stored under `key`, in pre-order. Non-string matches are dropped.
pub fn collect_strings_by_key(tree: &JsonValue, key: &str) -> Vec<String> {
    collect_by_key(tree, key)
        .into_iter()
        .filter_map(|value| match value {
            JsonValue::String(s) => Some(s.clone()),
            other => {
                debug!("Skipping non-string value under '{key}': {other}");
                None
            }
        })
        .collect()
}

/// First object of `tree` (root included) satisfying `predicate`
pub fn find_first<'a, P>(tree: &'a JsonValue, mut predicate: P) -> Option<&'a JsonObject>
where
    P: FnMut(&JsonObject) -> bool,
{
    walk(tree)
        .filter_map(|(_, value)| value.as_object())
        .find(|object| predicate(object))
}

/// Token of the first `Bottom` cursor entry carrying a non-empty value
pub fn bottom_cursor(tree: &JsonValue) -> Option<String> {
    find_first(tree, |object| {
        object.get(CURSOR_TYPE_KEY).and_then(JsonValue::as_str) == Some(BOTTOM_CURSOR)
            && object
                .get(CURSOR_VALUE_KEY)
                .and_then(JsonValue::as_str)
                .is_some_and(|v| !v.is_empty())
    })
    .and_then(|object| object.get(CURSOR_VALUE_KEY))
    .and_then(JsonValue::as_str)
    .map(str::to_string)
}
