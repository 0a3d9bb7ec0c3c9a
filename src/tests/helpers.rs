//! Test helper utilities shared by the unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::{Credentials, PetFriendsConfig};
use crate::core_types::{ApiResponse, AuthKey, PetFields};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

pub const TEST_EMAIL: &str = "owner@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TEST_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

/// Directory holding the image fixtures checked into the crate
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/images")
}

/// A valid configuration pointing at a placeholder service
pub fn create_test_config() -> PetFriendsConfig {
    PetFriendsConfig {
        base_url: "http://petfriends.test".to_string(),
        credentials: Credentials::new(TEST_EMAIL, TEST_PASSWORD),
        fixtures_dir: fixtures_dir(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn key_response() -> ApiResponse {
    ApiResponse::json(200, json!({ "key": TEST_KEY }))
}

pub fn forbidden_response() -> ApiResponse {
    ApiResponse::text(403, "<p>Please provide &#x27;auth_key&#x27; Header</p>")
}

/// What the service answers to a successful create or update
pub fn echo_pet_response(id: &str, pet: &PetFields) -> ApiResponse {
    ApiResponse::json(
        200,
        json!({
            "id": id,
            "name": pet.name,
            "animal_type": pet.animal_type,
            "age": pet.age,
            "pet_photo": "",
            "created_at": "1700000000.123",
            "user_id": "owner-1",
        }),
    )
}

pub fn pet_list_response(ids: &[&str]) -> ApiResponse {
    let pets: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "name": "Барсик",
                "animal_type": "кот",
                "age": "4",
                "pet_photo": "",
            })
        })
        .collect();
    ApiResponse::json(200, json!({ "pets": pets }))
}

pub fn is_test_key(key: &AuthKey) -> bool {
    key.as_str() == TEST_KEY
}
