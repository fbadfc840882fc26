//! The error collection carried by an [`Outcome`](crate::Outcome)

use serde_json::{Map, Value};

/// Error details attached to an outcome.
///
/// The collection has two shapes: an ordered list of error values (e.g.
/// messages appended one by one) or a keyed map (e.g. per-field validation
/// errors). Which shape a bag has depends on how it was populated; append
/// and merge are defined per shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBag {
    /// Ordered sequence of error values
    List(Vec<Value>),

    /// Error values keyed by name, insertion order preserved
    Map(Map<String, Value>),
}

impl Default for ErrorBag {
    fn default() -> Self {
        ErrorBag::List(Vec::new())
    }
}

impl ErrorBag {
    /// Create a new empty list-shaped bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of errors held
    pub fn len(&self) -> usize {
        match self {
            ErrorBag::List(items) => items.len(),
            ErrorBag::Map(entries) => entries.len(),
        }
    }

    /// Check whether the bag holds no errors
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the bag as a list, if it has list shape
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            ErrorBag::List(items) => Some(items),
            ErrorBag::Map(_) => None,
        }
    }

    /// View the bag as a keyed map, if it has map shape
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            ErrorBag::List(_) => None,
            ErrorBag::Map(entries) => Some(entries),
        }
    }

    /// Append a single error value.
    ///
    /// On a list the value becomes the trailing element. On a map it is
    /// inserted under the next free integer key (one past the largest
    /// integer key present, or "0" for a map with no integer keys).
    pub fn push(&mut self, value: Value) {
        match self {
            ErrorBag::List(items) => items.push(value),
            ErrorBag::Map(entries) => {
                let next = entries
                    .keys()
                    .filter_map(|key| key.parse::<usize>().ok())
                    .map(|index| index + 1)
                    .max()
                    .unwrap_or(0);
                entries.insert(next.to_string(), value);
            }
        }
    }

    /// Union-merge another bag into this one.
    ///
    /// Existing entries always win: a merged list only fills positions past
    /// the current length, and a merged map only adds keys not already
    /// present. Merging a map into a list first promotes the list to a map
    /// keyed by the original positions.
    pub fn merge(&mut self, other: ErrorBag) {
        match other {
            ErrorBag::List(incoming) => match self {
                ErrorBag::List(items) => {
                    for (index, value) in incoming.into_iter().enumerate() {
                        if index >= items.len() {
                            items.push(value);
                        }
                    }
                }
                ErrorBag::Map(entries) => {
                    for (index, value) in incoming.into_iter().enumerate() {
                        entries.entry(index.to_string()).or_insert(value);
                    }
                }
            },
            ErrorBag::Map(incoming) => {
                self.promote();
                if let ErrorBag::Map(entries) = self {
                    for (key, value) in incoming {
                        entries.entry(key).or_insert(value);
                    }
                }
            }
        }
    }

    /// Rewrite a list-shaped bag as a map keyed by position. No-op on maps.
    fn promote(&mut self) {
        if let ErrorBag::List(items) = self {
            let entries = items
                .drain(..)
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect();
            *self = ErrorBag::Map(entries);
        }
    }
}

impl From<Vec<Value>> for ErrorBag {
    fn from(items: Vec<Value>) -> Self {
        ErrorBag::List(items)
    }
}

impl From<Map<String, Value>> for ErrorBag {
    fn from(entries: Map<String, Value>) -> Self {
        ErrorBag::Map(entries)
    }
}
