//! Test helper utilities for petfriends-api integration tests
//!
//! Provides configuration pointing at a wiremock server, a byte-level body
//! matcher (multipart bodies carry binary JPEG data, so string matchers
//! cannot be used), and two fake PetFriends services:
//!
//! - `mount_strict_petfriends`: behaves the way the real service is expected to
//! - `mount_lenient_petfriends`: accepts every request with 200
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use petfriends_api::{Credentials, PetFriendsConfig};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path, path_regex, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const TEST_EMAIL: &str = "owner@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TEST_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/images")
}

/// Configuration aimed at a running mock server
pub fn config_for(server: &MockServer) -> PetFriendsConfig {
    PetFriendsConfig {
        base_url: server.uri(),
        credentials: Credentials::new(TEST_EMAIL, TEST_PASSWORD),
        fixtures_dir: fixtures_dir(),
        request_timeout: Duration::from_secs(5),
    }
}

// ============================================================================
// Matchers
// ============================================================================

/// Matches when the raw request body contains a byte sequence
pub struct BodyBytesContain(Vec<u8>);

impl Match for BodyBytesContain {
    fn matches(&self, request: &Request) -> bool {
        !self.0.is_empty() && request.body.windows(self.0.len()).any(|w| w == self.0.as_slice())
    }
}

pub fn body_bytes_contain(needle: impl AsRef<[u8]>) -> BodyBytesContain {
    BodyBytesContain(needle.as_ref().to_vec())
}

/// Matches a multipart text field with exactly this value
pub fn multipart_field(name: &str, value: &str) -> BodyBytesContain {
    body_bytes_contain(format!("name=\"{name}\"\r\n\r\n{value}\r\n"))
}

/// Whether a captured request body contains `needle`
pub fn body_has(request: &Request, needle: impl AsRef<[u8]>) -> bool {
    body_bytes_contain(needle).matches(request)
}

pub fn header_value<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

// ============================================================================
// Canned bodies
// ============================================================================

pub fn pet_json(id: &str, name: &str, animal_type: &str, age: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "pet_photo": "",
        "created_at": "1700000000.5",
        "user_id": "owner-1",
    })
}

pub fn pets_json(pets: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "pets": pets })
}

fn forbidden() -> ResponseTemplate {
    ResponseTemplate::new(403).set_body_string(
        "<!doctype html><title>403 Forbidden</title><p>Please provide 'auth_key' Header</p>",
    )
}

fn bad_request() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_string("<title>400 Bad Request</title>")
}

fn ok_json(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(value)
}

// ============================================================================
// Fake services
// ============================================================================

/// Key issuance and the rejection fallbacks shared by both fakes
async fn mount_auth(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", TEST_EMAIL))
        .and(header("password", TEST_PASSWORD))
        .respond_with(ok_json(json!({ "key": TEST_KEY })))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(forbidden())
        .mount(server)
        .await;
}

/// A PetFriends fake that validates input the way the real service should
///
/// The account owns one pet, `mine-1`. Pets created without a photo get id
/// `scratch-1` unless they are the `Барсик` fixture, which gets `simple-1`.
pub async fn mount_strict_petfriends(server: &MockServer) {
    mount_auth(server).await;

    // Listing
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .and(query_param("filter", "my_pets"))
        .respond_with(ok_json(pets_json(vec![pet_json("mine-1", "Барсик", "кот", "4")])))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pets_json(vec![
            pet_json("mine-1", "Барсик", "кот", "4"),
            pet_json("other-7", "Шарик", "пёс", "2"),
        ])))
        .with_priority(2)
        .mount(server)
        .await;

    // Create with photo: invalid input first
    for rejected in [
        multipart_field("name", ""),
        multipart_field("age", "1000"),
        body_bytes_contain("filename=\"cat1.txt\""),
    ] {
        Mock::given(method("POST"))
            .and(path("/api/pets"))
            .and(header("auth_key", TEST_KEY))
            .and(rejected)
            .respond_with(bad_request())
            .with_priority(1)
            .mount(server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .and(body_bytes_contain("name=\"pet_photo\""))
        .respond_with(ok_json(pet_json("photo-1", "Барсик", "кот", "4")))
        .with_priority(2)
        .mount(server)
        .await;

    // Create without photo
    Mock::given(method("POST"))
        .and(path("/api/create_pet_simple"))
        .and(header("auth_key", TEST_KEY))
        .and(multipart_field("name", "Барсик"))
        .respond_with(ok_json(pet_json("simple-1", "Барсик", "кот", "4")))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/create_pet_simple"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pet_json("scratch-1", "scratch", "кот", "3")))
        .with_priority(2)
        .mount(server)
        .await;

    // Update
    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/pets/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .and(body_string_contains("age=-1"))
        .respond_with(bad_request())
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/pets/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pet_json("scratch-1", "Мурзик", "кот", "5")))
        .with_priority(2)
        .mount(server)
        .await;

    // Delete
    Mock::given(method("DELETE"))
        .and(path("/api/pets/invalid_id"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Pet not found"))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/pets/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(2)
        .mount(server)
        .await;

    // Photo
    Mock::given(method("POST"))
        .and(path_regex(r"^/api/pets/set_photo/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(json!({
            "id": "scratch-1",
            "name": "scratch",
            "animal_type": "кот",
            "age": "3",
            "pet_photo": "data:image/jpeg;base64,/9j/4AAQSkZJRg==",
        })))
        .with_priority(1)
        .mount(server)
        .await;

    mount_unauthorized_fallback(server).await;
}

/// A PetFriends fake that accepts anything from an authenticated caller
pub async fn mount_lenient_petfriends(server: &MockServer) {
    mount_auth(server).await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pets_json(vec![pet_json("mine-1", "Барсик", "кот", "4")])))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/api/(pets|create_pet_simple)$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pet_json("loose-1", "", "", "1000")))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/pets/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ok_json(pet_json("mine-1", "Барсик", "кот", "-1")))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/pets/[^/]+$"))
        .and(header("auth_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(server)
        .await;

    mount_unauthorized_fallback(server).await;
}

/// Anything under /api/pets without the valid key is refused
async fn mount_unauthorized_fallback(server: &MockServer) {
    Mock::given(path_regex(r"^/api/(pets|create_pet_simple)"))
        .respond_with(forbidden())
        .with_priority(10)
        .mount(server)
        .await;
}
