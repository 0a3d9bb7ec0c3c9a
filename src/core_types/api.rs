//! The `PetFriendsApi` trait: the boundary between scenarios and the service
//!
//! [`PetFriendsClient`](crate::PetFriendsClient) implements it over HTTP;
//! harness tests substitute a mock.

use crate::core_types::models::{ApiResponse, AuthKey, PetFields, PetFilter};
use crate::error::PetFriendsResult;
use async_trait::async_trait;
use std::path::Path;

/// Operations exposed by the PetFriends REST API
///
/// Every call returns the service's status and body, whatever the status.
/// `Err` is reserved for failures that stop a response from being obtained
/// at all: a missing photo file, an unencodable header, a dropped connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetFriendsApi: Send + Sync {
    /// `GET /api/key`: exchange credentials for an [`AuthKey`]
    async fn get_api_key(&self, email: &str, password: &str) -> PetFriendsResult<ApiResponse>;

    /// `GET /api/pets`
    async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> PetFriendsResult<ApiResponse>;

    /// `POST /api/pets` with the photo at `photo_path` attached
    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        pet: &PetFields,
        photo_path: &Path,
    ) -> PetFriendsResult<ApiResponse>;

    /// `POST /api/create_pet_simple`
    async fn add_new_pet_no_photo(
        &self,
        auth_key: &AuthKey,
        pet: &PetFields,
    ) -> PetFriendsResult<ApiResponse>;

    /// `PUT /api/pets/{pet_id}`
    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet: &PetFields,
    ) -> PetFriendsResult<ApiResponse>;

    /// `DELETE /api/pets/{pet_id}`
    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> PetFriendsResult<ApiResponse>;

    /// `POST /api/pets/set_photo/{pet_id}`
    async fn set_pet_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> PetFriendsResult<ApiResponse>;
}
