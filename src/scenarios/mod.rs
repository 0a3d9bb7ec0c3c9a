//! Verification scenarios against the PetFriends API
//!
//! Each [`Scenario`] is an independent arrange/act/assert procedure: obtain a
//! key, optionally look at existing data, make one call, check the status and
//! body. Scenarios share no state and can run in any order. Anything a
//! scenario needs to exist remotely (an owned pet, for instance) it creates
//! during setup, and whatever it creates is deleted on teardown.
//!
//! Run them through [`ScenarioRunner`], which classifies each run into a
//! [`ScenarioOutcome`]:
//!
//! ```rust,no_run
//! use petfriends_api::{PetFriendsClient, PetFriendsConfig, Scenario, ScenarioRunner};
//!
//! # async fn example() -> petfriends_api::PetFriendsResult<()> {
//! let config = PetFriendsConfig::from_env()?;
//! let client = PetFriendsClient::new(&config)?;
//! let runner = ScenarioRunner::new(&client, &config);
//!
//! let report = runner.run(Scenario::DeleteNonexistentPet).await;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod assertions;
mod auth;
pub mod context;
mod pets;
pub mod runner;

pub use context::ScenarioContext;
pub use runner::{ScenarioOutcome, ScenarioReport, ScenarioRunner, SuiteReport};

use crate::error::PetFriendsResult;
use std::fmt;

/// Every scenario in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    GetApiKeyForValidUser,
    GetApiKeyWithInvalidPassword,
    GetApiKeyWithEmptyEmail,
    GetApiKeyWithEmptyPassword,
    GetAllPetsWithValidKey,
    GetAllPetsWithInvalidKey,
    GetAllPetsWithFilterMyPets,
    AddNewPetWithValidData,
    AddNewPetWithoutPhoto,
    AddNewPetWithEmptyData,
    AddNewPetWithLargeAge,
    AddPetWithInvalidPhotoFormat,
    AddPetWithNonAsciiPhotoName,
    UpdateSelfPetInfo,
    UpdatePetWithInvalidAge,
    DeleteSelfPet,
    DeleteNonexistentPet,
    SetPhotoForSelfPet,
}

impl Scenario {
    pub const ALL: [Scenario; 18] = [
        Scenario::GetApiKeyForValidUser,
        Scenario::GetApiKeyWithInvalidPassword,
        Scenario::GetApiKeyWithEmptyEmail,
        Scenario::GetApiKeyWithEmptyPassword,
        Scenario::GetAllPetsWithValidKey,
        Scenario::GetAllPetsWithInvalidKey,
        Scenario::GetAllPetsWithFilterMyPets,
        Scenario::AddNewPetWithValidData,
        Scenario::AddNewPetWithoutPhoto,
        Scenario::AddNewPetWithEmptyData,
        Scenario::AddNewPetWithLargeAge,
        Scenario::AddPetWithInvalidPhotoFormat,
        Scenario::AddPetWithNonAsciiPhotoName,
        Scenario::UpdateSelfPetInfo,
        Scenario::UpdatePetWithInvalidAge,
        Scenario::DeleteSelfPet,
        Scenario::DeleteNonexistentPet,
        Scenario::SetPhotoForSelfPet,
    ];

    /// Stable snake_case identifier, used in reports
    pub fn name(self) -> &'static str {
        match self {
            Self::GetApiKeyForValidUser => "get_api_key_for_valid_user",
            Self::GetApiKeyWithInvalidPassword => "get_api_key_with_invalid_password",
            Self::GetApiKeyWithEmptyEmail => "get_api_key_with_empty_email",
            Self::GetApiKeyWithEmptyPassword => "get_api_key_with_empty_password",
            Self::GetAllPetsWithValidKey => "get_all_pets_with_valid_key",
            Self::GetAllPetsWithInvalidKey => "get_all_pets_with_invalid_key",
            Self::GetAllPetsWithFilterMyPets => "get_all_pets_with_filter_my_pets",
            Self::AddNewPetWithValidData => "add_new_pet_with_valid_data",
            Self::AddNewPetWithoutPhoto => "add_new_pet_without_photo",
            Self::AddNewPetWithEmptyData => "add_new_pet_with_empty_data",
            Self::AddNewPetWithLargeAge => "add_new_pet_with_large_age",
            Self::AddPetWithInvalidPhotoFormat => "add_pet_with_invalid_photo_format",
            Self::AddPetWithNonAsciiPhotoName => "add_pet_with_non_ascii_photo_name",
            Self::UpdateSelfPetInfo => "update_self_pet_info",
            Self::UpdatePetWithInvalidAge => "update_pet_with_invalid_age",
            Self::DeleteSelfPet => "delete_self_pet",
            Self::DeleteNonexistentPet => "delete_nonexistent_pet",
            Self::SetPhotoForSelfPet => "set_photo_for_self_pet",
        }
    }

    /// What the scenario checks, in one line
    pub fn description(self) -> &'static str {
        match self {
            Self::GetApiKeyForValidUser => "valid credentials yield status 200 and a key",
            Self::GetApiKeyWithInvalidPassword => "a wrong password yields status 403",
            Self::GetApiKeyWithEmptyEmail => "an empty email yields status 403",
            Self::GetApiKeyWithEmptyPassword => "an empty password yields status 403",
            Self::GetAllPetsWithValidKey => "listing all pets with a valid key yields a pet list",
            Self::GetAllPetsWithInvalidKey => {
                "listing pets with an invalid key yields status 403 for every filter"
            }
            Self::GetAllPetsWithFilterMyPets => {
                "listing own pets after one exists yields a non-empty list"
            }
            Self::AddNewPetWithValidData => "adding a pet with a photo echoes its name",
            Self::AddNewPetWithoutPhoto => {
                "adding a pet without a photo echoes name, animal type and age"
            }
            Self::AddNewPetWithEmptyData => "adding a pet with empty fields is not accepted",
            Self::AddNewPetWithLargeAge => "adding a pet aged 1000 is not accepted",
            Self::AddPetWithInvalidPhotoFormat => "adding a pet with a .txt photo is not accepted",
            Self::AddPetWithNonAsciiPhotoName => {
                "adding a pet whose photo has a non-ASCII file name is accepted"
            }
            Self::UpdateSelfPetInfo => "updating an own pet echoes the new name",
            Self::UpdatePetWithInvalidAge => "updating a pet with a negative age is not accepted",
            Self::DeleteSelfPet => "deleting an own pet removes it from my_pets",
            Self::DeleteNonexistentPet => "deleting a nonexistent pet yields status 404",
            Self::SetPhotoForSelfPet => "setting a photo on an own pet returns the photo",
        }
    }

    /// Look a scenario up by its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Execute the scenario body. Teardown is the caller's job.
    pub async fn execute(self, ctx: &mut ScenarioContext<'_>) -> PetFriendsResult<()> {
        match self {
            Self::GetApiKeyForValidUser => auth::get_api_key_for_valid_user(ctx).await,
            Self::GetApiKeyWithInvalidPassword => {
                auth::get_api_key_with_invalid_password(ctx).await
            }
            Self::GetApiKeyWithEmptyEmail => auth::get_api_key_with_empty_email(ctx).await,
            Self::GetApiKeyWithEmptyPassword => auth::get_api_key_with_empty_password(ctx).await,
            Self::GetAllPetsWithValidKey => pets::get_all_pets_with_valid_key(ctx).await,
            Self::GetAllPetsWithInvalidKey => pets::get_all_pets_with_invalid_key(ctx).await,
            Self::GetAllPetsWithFilterMyPets => pets::get_all_pets_with_filter_my_pets(ctx).await,
            Self::AddNewPetWithValidData => pets::add_new_pet_with_valid_data(ctx).await,
            Self::AddNewPetWithoutPhoto => pets::add_new_pet_without_photo(ctx).await,
            Self::AddNewPetWithEmptyData => pets::add_new_pet_with_empty_data(ctx).await,
            Self::AddNewPetWithLargeAge => pets::add_new_pet_with_large_age(ctx).await,
            Self::AddPetWithInvalidPhotoFormat => {
                pets::add_pet_with_invalid_photo_format(ctx).await
            }
            Self::AddPetWithNonAsciiPhotoName => pets::add_pet_with_non_ascii_photo_name(ctx).await,
            Self::UpdateSelfPetInfo => pets::update_self_pet_info(ctx).await,
            Self::UpdatePetWithInvalidAge => pets::update_pet_with_invalid_age(ctx).await,
            Self::DeleteSelfPet => pets::delete_self_pet(ctx).await,
            Self::DeleteNonexistentPet => pets::delete_nonexistent_pet(ctx).await,
            Self::SetPhotoForSelfPet => pets::set_photo_for_self_pet(ctx).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
