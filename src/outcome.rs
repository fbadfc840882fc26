//! The Outcome value type

use crate::ErrorBag;
use serde_json::{Map, Value};
use std::fmt;

/// The outcome of an operation, passed between layers as plain data.
///
/// An outcome carries:
/// - `success`: whether the operation succeeded, fixed at construction
/// - `code`: short machine-oriented status code (see [`crate::code`])
/// - `message`: human-readable elaboration
/// - `errors`: structured error details, list- or map-shaped
/// - `extras`: free-form keyed side-channel data
/// - `cause`: the captured underlying failure (if any)
///
/// # Example
///
/// ```rust
/// use outcome::{code, Outcome};
///
/// let mut saved = Outcome::fail();
/// saved
///     .set_code(code::VALIDATION)
///     .set_message("profile could not be saved")
///     .add_error("email address is required");
///
/// assert!(saved.is_fail());
/// assert_eq!(saved.code(), "validation");
/// assert_eq!(saved.errors().len(), 1);
/// ```
pub struct Outcome {
    success: bool,
    code: String,
    message: String,
    errors: ErrorBag,
    extras: Map<String, Value>,
    cause: Option<anyhow::Error>,
}

impl Outcome {
    /// Create an outcome with the given success flag and everything else
    /// at its default. The flag cannot be changed afterwards.
    pub fn new(success: bool) -> Self {
        Self {
            success,
            code: String::new(),
            message: String::new(),
            errors: ErrorBag::new(),
            extras: Map::new(),
            cause: None,
        }
    }

    /// Create a bare success outcome
    pub fn success() -> Self {
        Self::new(true)
    }

    /// Create a bare fail outcome
    pub fn fail() -> Self {
        Self::new(false)
    }

    /// Create a success outcome, applying each non-empty argument
    pub fn success_with(
        code: impl Into<String>,
        message: impl Into<String>,
        errors: impl Into<ErrorBag>,
        extras: Map<String, Value>,
    ) -> Self {
        Self::load(true, code.into(), message.into(), errors.into(), extras, None)
    }

    /// Create a fail outcome, applying each non-empty argument and the
    /// captured cause if present
    pub fn fail_with(
        code: impl Into<String>,
        message: impl Into<String>,
        errors: impl Into<ErrorBag>,
        extras: Map<String, Value>,
        cause: Option<anyhow::Error>,
    ) -> Self {
        Self::load(false, code.into(), message.into(), errors.into(), extras, cause)
    }

    /// Load up the outcome. Empty arguments never overwrite the defaults,
    /// so an explicitly-empty code, message, bag or extras map is the same
    /// as omitting it.
    fn load(
        success: bool,
        code: String,
        message: String,
        errors: ErrorBag,
        extras: Map<String, Value>,
        cause: Option<anyhow::Error>,
    ) -> Self {
        let mut outcome = Self::new(success);

        if !code.is_empty() {
            outcome.set_code(code);
        }

        if !message.is_empty() {
            outcome.set_message(message);
        }

        if !errors.is_empty() {
            outcome.set_errors(errors);
        }

        if !extras.is_empty() {
            outcome.set_extras(extras);
        }

        if cause.is_some() {
            outcome.set_cause(cause);
        }

        outcome
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Was the operation successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Did the operation fail
    pub fn is_fail(&self) -> bool {
        !self.success
    }

    /// Get the status code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error collection
    pub fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    /// Get the extra data
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }

    /// Get an individual extra item.
    ///
    /// Returns `false` when the key is not present, so a stored `false`
    /// cannot be told apart from a missing key by the return value alone.
    /// Use `extras().get(key)` when that distinction matters.
    pub fn extra(&self, key: &str) -> &Value {
        static NOT_FOUND: Value = Value::Bool(false);
        self.extras.get(key).unwrap_or(&NOT_FOUND)
    }

    /// Get the captured underlying failure, if one was set
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    // =========================================================================
    // Setters (chainable, mutate this instance)
    // =========================================================================

    /// Set the status code
    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = code.into();
        self
    }

    /// Set a more elaborate message
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Replace the whole error collection
    pub fn set_errors(&mut self, errors: impl Into<ErrorBag>) -> &mut Self {
        self.errors = errors.into();
        self
    }

    /// Add to the error collection.
    ///
    /// A scalar value is appended. An object or array is union-merged into
    /// the existing collection, existing entries winning on key conflicts
    /// (see [`ErrorBag::merge`]).
    pub fn add_error(&mut self, error: impl Into<Value>) -> &mut Self {
        match error.into() {
            Value::Object(entries) => self.errors.merge(ErrorBag::Map(entries)),
            Value::Array(items) => self.errors.merge(ErrorBag::List(items)),
            value => self.errors.push(value),
        }
        self
    }

    /// Insert or overwrite a single extra item
    pub fn set_extra(&mut self, key: impl Into<String>, data: impl Into<Value>) -> &mut Self {
        self.extras.insert(key.into(), data.into());
        self
    }

    /// Replace the whole extras map
    pub fn set_extras(&mut self, extras: Map<String, Value>) -> &mut Self {
        self.extras = extras;
        self
    }

    /// Overwrite the captured underlying failure; `None` clears it
    pub fn set_cause(&mut self, cause: Option<anyhow::Error>) -> &mut Self {
        self.cause = cause;
        self
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.success { "success" } else { "fail" })?;

        if !self.code.is_empty() {
            write!(f, " ({})", self.code)?;
        }

        if !self.errors.is_empty() {
            write!(f, ", {} error(s)", self.errors.len())?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({})",
            if self.success { "success" } else { "fail" },
            self.code
        )?;

        if !self.message.is_empty() {
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.errors.is_empty() {
            writeln!(f, "    Errors: {:?}", self.errors)?;
        }

        if !self.extras.is_empty() {
            writeln!(f, "    Extras: {:?}", self.extras)?;
        }

        if let Some(cause) = &self.cause {
            writeln!(f, "    Cause: {:?}", cause)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code;
    use serde_json::json;

    fn map_of(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_success_defaults() {
        let outcome = Outcome::success();
        assert!(outcome.is_success());
        assert!(!outcome.is_fail());
        assert_eq!(outcome.code(), "");
        assert_eq!(outcome.message(), "");
        assert!(outcome.errors().is_empty());
        assert!(outcome.extras().is_empty());
        assert!(outcome.cause().is_none());
    }

    #[test]
    fn test_fail_defaults() {
        let outcome = Outcome::fail();
        assert!(outcome.is_fail());
        assert!(!outcome.is_success());
        assert_eq!(outcome.code(), "");
        assert!(outcome.errors().is_empty());
        assert!(outcome.cause().is_none());
    }

    #[test]
    fn test_success_and_fail_are_complements() {
        for outcome in [Outcome::new(true), Outcome::new(false)] {
            assert_ne!(outcome.is_success(), outcome.is_fail());
        }
    }

    #[test]
    fn test_factory_applies_nonempty_arguments() {
        let outcome = Outcome::success_with(
            code::CREATED,
            "user created",
            vec![],
            map_of(&[("id", json!(42))]),
        );

        assert!(outcome.is_success());
        assert_eq!(outcome.code(), "created");
        assert_eq!(outcome.message(), "user created");
        assert_eq!(outcome.extra("id"), &json!(42));
    }

    #[test]
    fn test_empty_arguments_same_as_omitted() {
        // An empty map-shaped bag is skipped too, so the default list
        // shape survives.
        let outcome = Outcome::fail_with("", "", Map::new(), Map::new(), None);

        assert_eq!(outcome.code(), "");
        assert_eq!(outcome.message(), "");
        assert!(outcome.errors().as_list().is_some());
        assert!(outcome.cause().is_none());
    }

    #[test]
    fn test_fail_with_cause() {
        let outcome = Outcome::fail_with(
            code::ERROR,
            "save failed",
            vec![],
            Map::new(),
            Some(anyhow::anyhow!("disk full")),
        );

        assert!(outcome.is_fail());
        assert_eq!(outcome.cause().map(|cause| cause.to_string()), Some("disk full".into()));
    }

    #[test]
    fn test_extra_round_trip() {
        let mut outcome = Outcome::success();
        outcome.set_extra("k", "v");

        assert_eq!(outcome.extra("k"), &json!("v"));
        assert_eq!(outcome.extra("missing"), &Value::Bool(false));
    }

    #[test]
    fn test_stored_false_matches_missing_key() {
        let mut outcome = Outcome::success();
        outcome.set_extra("k", false);

        // The false sentinel makes these indistinguishable by value...
        assert_eq!(outcome.extra("k"), outcome.extra("missing"));
        // ...while the extras map still tells them apart.
        assert!(outcome.extras().contains_key("k"));
        assert!(!outcome.extras().contains_key("missing"));
    }

    #[test]
    fn test_set_extras_replaces_wholesale() {
        let mut outcome = Outcome::success();
        outcome.set_extra("old", "value");
        outcome.set_extras(map_of(&[("new", json!("value"))]));

        assert_eq!(outcome.extra("old"), &Value::Bool(false));
        assert_eq!(outcome.extra("new"), &json!("value"));
    }

    #[test]
    fn test_add_error_appends_in_order() {
        let mut outcome = Outcome::fail();
        outcome.add_error("a").add_error("b");

        assert_eq!(outcome.errors().as_list().unwrap(), &[json!("a"), json!("b")]);
    }

    #[test]
    fn test_add_error_merge_keeps_existing_keys() {
        let mut outcome = Outcome::fail();
        outcome.set_errors(map_of(&[("x", json!(1))]));
        outcome.add_error(json!({ "x": 2, "y": 3 }));

        assert_eq!(
            outcome.errors().as_map().unwrap(),
            &map_of(&[("x", json!(1)), ("y", json!(3))])
        );
    }

    #[test]
    fn test_set_errors_replaces_wholesale() {
        let mut outcome = Outcome::fail();
        outcome.add_error("stale");
        outcome.set_errors(vec![json!("fresh")]);

        assert_eq!(outcome.errors().as_list().unwrap(), &[json!("fresh")]);
    }

    #[test]
    fn test_fluent_chain_mutates_one_instance() {
        let mut outcome = Outcome::fail();
        outcome
            .set_code(code::ERROR)
            .set_message("m")
            .add_error("e1");

        assert!(outcome.is_fail());
        assert_eq!(outcome.code(), "error");
        assert_eq!(outcome.message(), "m");
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn test_cause_round_trip() {
        let mut outcome = Outcome::fail();
        assert!(outcome.cause().is_none());

        outcome.set_cause(Some(anyhow::anyhow!("connection refused")));
        assert_eq!(
            outcome.cause().map(|cause| cause.to_string()),
            Some("connection refused".into())
        );

        outcome.set_cause(None);
        assert!(outcome.cause().is_none());
    }

    #[test]
    fn test_display() {
        let mut outcome = Outcome::fail();
        outcome
            .set_code(code::VALIDATION)
            .set_message("could not save profile")
            .add_error("email is required");

        let display = format!("{}", outcome);
        assert!(display.contains("fail"));
        assert!(display.contains("validation"));
        assert!(display.contains("1 error(s)"));
        assert!(display.contains("could not save profile"));
    }

    #[test]
    fn test_debug_includes_cause() {
        let mut outcome = Outcome::fail();
        outcome
            .set_code(code::FAILED)
            .set_cause(Some(anyhow::anyhow!("boom")));

        let debug = format!("{:?}", outcome);
        assert!(debug.contains("fail (failed)"));
        assert!(debug.contains("boom"));
    }
}
