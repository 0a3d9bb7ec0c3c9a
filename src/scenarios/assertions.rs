//! Status and body checks used by scenarios. Each returns
//! [`PetFriendsError::AssertionFailed`] with expected-versus-actual text.

use crate::core_types::{ApiResponse, PetList, ResponseBody};
use crate::error::{PetFriendsError, PetFriendsResult};

const EXCERPT_CHARS: usize = 200;

/// Short rendering of a response body for failure messages
pub fn body_excerpt(response: &ApiResponse) -> String {
    let rendered = match &response.body {
        ResponseBody::Json(value) => value.to_string(),
        ResponseBody::Text(text) => text.clone(),
    };
    if rendered.chars().count() > EXCERPT_CHARS {
        let head: String = rendered.chars().take(EXCERPT_CHARS).collect();
        format!("{head}...")
    } else {
        rendered
    }
}

pub fn expect_status(response: &ApiResponse, expected: u16, call: &str) -> PetFriendsResult<()> {
    if response.status == expected {
        return Ok(());
    }
    Err(PetFriendsError::assertion_failed(format!(
        "{call}: expected status {expected}, got {} (body: {})",
        response.status,
        body_excerpt(response)
    )))
}

/// The service must not report success
pub fn expect_rejected(response: &ApiResponse, call: &str) -> PetFriendsResult<()> {
    if !response.is_success() {
        return Ok(());
    }
    Err(PetFriendsError::assertion_failed(format!(
        "{call}: expected a status other than 200, got 200 (body: {})",
        body_excerpt(response)
    )))
}

/// A top-level body field must equal `expected`; numbers compare by their
/// text form
pub fn expect_field(response: &ApiResponse, field: &str, expected: &str) -> PetFriendsResult<()> {
    match response.field_text(field) {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(PetFriendsError::assertion_failed(format!(
            "field '{field}': expected '{expected}', got '{actual}'"
        ))),
        None => Err(PetFriendsError::assertion_failed(format!(
            "field '{field}' missing from body: {}",
            body_excerpt(response)
        ))),
    }
}

/// A top-level body field must be a non-empty string
pub fn expect_non_empty_field(response: &ApiResponse, field: &str) -> PetFriendsResult<()> {
    match response.field_text(field) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(PetFriendsError::assertion_failed(format!(
            "field '{field}' missing or empty in body: {}",
            body_excerpt(response)
        ))),
    }
}

/// The body must be a pet list
pub fn expect_pet_list(response: &ApiResponse) -> PetFriendsResult<PetList> {
    response.parse::<PetList>().map_err(|_| {
        PetFriendsError::assertion_failed(format!(
            "expected a pet list, got: {}",
            body_excerpt(response)
        ))
    })
}
