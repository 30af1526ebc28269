//! Request handlers for the blog resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate the request body, delegate to the matching service in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod category;
pub mod comment;
pub mod post;

use quill_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Reject a request body whose fields fail their `validator` rules.
///
/// The message lists every offending field, e.g.
/// `"email: Email must be a valid address; name: Name must not be empty"`.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut problems: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    problems.sort();

    Err(AppError::Core(CoreError::Validation(problems.join("; "))))
}
