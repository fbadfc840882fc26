//! # outcome
//!
//! A success/fail outcome value for passing operation results between
//! application layers (e.g. service -> controller) without throwing for
//! expected failure conditions.
//!
//! ## Design Philosophy
//!
//! - **Success flag**: exactly one of success/fail, fixed at construction
//! - **Code**: short machine-oriented classification (e.g. "not_found")
//! - **Message**: human-readable elaboration
//! - **Errors**: structured detail, list- or map-shaped ([`ErrorBag`])
//! - **Extras**: free-form keyed side-channel data
//! - **Cause**: the captured underlying failure, carried without rethrowing
//!
//! ## Usage
//!
//! ```rust
//! use outcome::{code, Outcome};
//!
//! let mut saved = Outcome::fail();
//! saved
//!     .set_code(code::VALIDATION)
//!     .set_message("profile could not be saved")
//!     .add_error("email address is required");
//!
//! assert!(saved.is_fail());
//! assert_eq!(saved.errors().len(), 1);
//! ```
//!
//! ## Principles
//!
//! - An outcome is created through [`Outcome::success`] / [`Outcome::fail`]
//!   (or their `_with` variants), then mutated fluently by whoever holds it
//! - Underlying failures are captured with `set_cause`, not re-thrown
//! - No operation here fails or panics; an outcome is pure data

pub mod code;
mod errors;
mod outcome;

pub use errors::ErrorBag;
pub use outcome::Outcome;
