//! Live Tests against the PetFriends Service
//!
//! UNIT UNDER TEST: the scenario catalogue against the real deployment
//!
//! These tests talk to the service named by `PETFRIENDS_BASE_URL` with the
//! account in `PETFRIENDS_EMAIL` / `PETFRIENDS_PASSWORD`. They are ignored by
//! default; run them with:
//!
//! ```text
//! PETFRIENDS_EMAIL=... PETFRIENDS_PASSWORD=... \
//!     cargo test --test live_petfriends_tests -- --ignored
//! ```
//!
//! The negative scenarios assert what the service should reject. When one
//! fails here, the deployment accepted input it should not have.

use petfriends_api::{PetFriendsClient, PetFriendsConfig, Scenario, ScenarioRunner};
use serial_test::serial;

async fn run_live(scenario: Scenario) {
    let config = PetFriendsConfig::from_env().expect("live configuration should be set");
    let client = PetFriendsClient::new(&config).expect("client should build");

    let report = ScenarioRunner::new(&client, &config).run(scenario).await;

    println!("{report}");
    assert!(report.is_passed(), "{report}");
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_api_key_for_valid_user() {
    run_live(Scenario::GetApiKeyForValidUser).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_api_key_with_invalid_password() {
    run_live(Scenario::GetApiKeyWithInvalidPassword).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_api_key_with_empty_email() {
    run_live(Scenario::GetApiKeyWithEmptyEmail).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_api_key_with_empty_password() {
    run_live(Scenario::GetApiKeyWithEmptyPassword).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_all_pets_with_valid_key() {
    run_live(Scenario::GetAllPetsWithValidKey).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_all_pets_with_invalid_key() {
    run_live(Scenario::GetAllPetsWithInvalidKey).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_get_all_pets_with_filter_my_pets() {
    run_live(Scenario::GetAllPetsWithFilterMyPets).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_new_pet_with_valid_data() {
    run_live(Scenario::AddNewPetWithValidData).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_new_pet_without_photo() {
    run_live(Scenario::AddNewPetWithoutPhoto).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_new_pet_with_empty_data() {
    run_live(Scenario::AddNewPetWithEmptyData).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_new_pet_with_large_age() {
    run_live(Scenario::AddNewPetWithLargeAge).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_pet_with_invalid_photo_format() {
    run_live(Scenario::AddPetWithInvalidPhotoFormat).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_add_pet_with_non_ascii_photo_name() {
    run_live(Scenario::AddPetWithNonAsciiPhotoName).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_update_self_pet_info() {
    run_live(Scenario::UpdateSelfPetInfo).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_update_pet_with_invalid_age() {
    run_live(Scenario::UpdatePetWithInvalidAge).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_delete_self_pet() {
    run_live(Scenario::DeleteSelfPet).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_delete_nonexistent_pet() {
    run_live(Scenario::DeleteNonexistentPet).await;
}

#[tokio::test]
#[ignore = "talks to the live PetFriends service"]
#[serial]
async fn test_live_set_photo_for_self_pet() {
    run_live(Scenario::SetPhotoForSelfPet).await;
}
