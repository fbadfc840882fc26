//! Conventional outcome code strings
//!
//! Readable codes describing an outcome, kept as plain strings so they stay
//! usable across languages and wire formats. These are suggested
//! conventions, not a closed set: any string is a valid code.

pub const CREATED: &str = "created";
pub const UPDATED: &str = "updated";
pub const SAVED: &str = "saved";
pub const DELETED: &str = "deleted";
pub const VALIDATION: &str = "validation";
pub const AUTHORISED: &str = "authorised";
pub const NOT_AUTHORISED: &str = "not_authorised";
pub const FOUND: &str = "found";
pub const NOT_FOUND: &str = "not_found";
pub const ERROR: &str = "error";
pub const FAILED: &str = "failed";
pub const PROCESSING: &str = "processing";

#[cfg(test)]
mod tests {
    use crate::{code, Outcome};

    #[test]
    fn test_codes_are_plain_strings() {
        let mut outcome = Outcome::success();
        outcome.set_code(code::NOT_FOUND);
        assert_eq!(outcome.code(), "not_found");

        // an open vocabulary: any caller-defined string works too
        outcome.set_code("rate_limited");
        assert_eq!(outcome.code(), "rate_limited");
    }
}
