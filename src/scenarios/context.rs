//! Per-run scenario state: the API handle, configuration, and the pets a
//! scenario created so they can be removed afterwards.

use crate::config::PetFriendsConfig;
use crate::core_types::{ApiResponse, AuthKey, Pet, PetFields, PetFilter, PetFriendsApi, PetList};
use crate::error::{PetFriendsError, PetFriendsResult};
use crate::logging::{log_debug, log_warn};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct ScenarioContext<'a> {
    api: &'a dyn PetFriendsApi,
    config: &'a PetFriendsConfig,
    created: Vec<(AuthKey, String)>,
}

impl<'a> ScenarioContext<'a> {
    pub fn new(api: &'a dyn PetFriendsApi, config: &'a PetFriendsConfig) -> Self {
        Self {
            api,
            config,
            created: Vec::new(),
        }
    }

    pub fn api(&self) -> &'a dyn PetFriendsApi {
        self.api
    }

    pub fn config(&self) -> &'a PetFriendsConfig {
        self.config
    }

    /// Resolve an image fixture, failing before any remote call if it is
    /// missing
    pub fn fixture(&self, name: impl AsRef<Path>) -> PetFriendsResult<PathBuf> {
        self.config.fixture_path(name)
    }

    /// Obtain a key with the configured (valid) credentials
    ///
    /// A rejection here is a setup failure, not an assertion failure: the
    /// scenario never got to ask its question.
    pub async fn acquire_key(&self) -> PetFriendsResult<AuthKey> {
        let credentials = &self.config.credentials;
        let response = self
            .api
            .get_api_key(&credentials.email, &credentials.password)
            .await?;

        if !response.is_success() {
            return Err(PetFriendsError::setup_failed(format!(
                "configured credentials for {} were rejected with status {}",
                credentials.email, response.status
            )));
        }

        AuthKey::from_response(&response)
    }

    pub async fn list_my_pets(&self, auth_key: &AuthKey) -> PetFriendsResult<PetList> {
        let response = self.api.get_list_of_pets(auth_key, PetFilter::MyPets).await?;
        if !response.is_success() {
            return Err(PetFriendsError::setup_failed(format!(
                "listing own pets returned status {}",
                response.status
            )));
        }
        response.parse()
    }

    /// Create a throwaway pet owned by the caller; it is deleted on teardown
    pub async fn create_scratch_pet(&mut self, auth_key: &AuthKey) -> PetFriendsResult<Pet> {
        let fields = PetFields::new(format!("scratch-{}", Uuid::new_v4().simple()), "кот", 3);
        let response = self.api.add_new_pet_no_photo(auth_key, &fields).await?;
        if !response.is_success() {
            return Err(PetFriendsError::setup_failed(format!(
                "creating a scratch pet returned status {}",
                response.status
            )));
        }

        let pet: Pet = response.parse()?;
        log_debug!(pet_id = %pet.id, "Scratch pet created");
        self.created.push((auth_key.clone(), pet.id.clone()));
        Ok(pet)
    }

    /// Return one of the caller's pets, creating one when the account has
    /// none
    pub async fn ensure_my_pet(&mut self, auth_key: &AuthKey) -> PetFriendsResult<Pet> {
        let existing = self.list_my_pets(auth_key).await?;
        match existing.pets.into_iter().next() {
            Some(pet) => Ok(pet),
            None => self.create_scratch_pet(auth_key).await,
        }
    }

    /// Register a pet created by the act step (or accidentally accepted by
    /// the service) for deletion on teardown
    pub fn track_created(&mut self, auth_key: &AuthKey, response: &ApiResponse) {
        if !response.is_success() {
            return;
        }
        if let Some(id) = response.field_text("id").filter(|id| !id.is_empty()) {
            self.created.push((auth_key.clone(), id));
        }
    }

    /// Stop tracking a pet the scenario already deleted itself
    pub fn forget(&mut self, pet_id: &str) {
        self.created.retain(|(_, id)| id != pet_id);
    }

    pub fn created_pet_ids(&self) -> impl Iterator<Item = &str> {
        self.created.iter().map(|(_, id)| id.as_str())
    }

    /// Best-effort removal of every tracked pet
    ///
    /// Failures are logged and otherwise ignored; they never change the
    /// scenario's outcome.
    pub async fn teardown(&mut self) {
        for (auth_key, pet_id) in std::mem::take(&mut self.created) {
            match self.api.delete_pet(&auth_key, &pet_id).await {
                Ok(response) if response.is_success() => {
                    log_debug!(pet_id = %pet_id, "Created pet removed");
                }
                Ok(response) => {
                    log_warn!(
                        pet_id = %pet_id,
                        status = response.status,
                        "Could not remove created pet"
                    );
                }
                Err(e) => {
                    log_warn!(pet_id = %pet_id, error = %e, "Could not remove created pet");
                }
            }
        }
    }
}
