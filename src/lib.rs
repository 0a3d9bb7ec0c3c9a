//! # petfriends-api
//!
//! Black-box verification harness for the PetFriends pet-management REST API.
//!
//! ## Key Features
//!
//! - **Thin client**: [`PetFriendsClient`] wraps every endpoint and returns the
//!   raw status plus parsed body, so rejections can be asserted on
//! - **Mockable seam**: scenarios talk to the [`PetFriendsApi`] trait
//! - **Scenario catalogue**: independent arrange/act/assert checks of the
//!   service's auth, listing, create, update and delete behaviour
//! - **Explicit outcomes**: local precondition failures are reported apart from
//!   remote misbehaviour
//!
//! ## Example
//!
//! ```rust,no_run
//! use petfriends_api::{PetFilter, PetFriendsApi, PetFriendsClient, PetFriendsConfig, AuthKey};
//!
//! # async fn example() -> petfriends_api::PetFriendsResult<()> {
//! let config = PetFriendsConfig::from_env()?;
//! let client = PetFriendsClient::new(&config)?;
//!
//! let response = client
//!     .get_api_key(&config.credentials.email, &config.credentials.password)
//!     .await?;
//! let auth_key = AuthKey::from_response(&response)?;
//!
//! let pets = client.get_list_of_pets(&auth_key, PetFilter::MyPets).await?;
//! println!("status {}", pets.status);
//! # Ok(())
//! # }
//! ```

// Errors are documented on the error type itself
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod scenarios;

#[cfg(test)]
pub mod tests;

pub use client::PetFriendsClient;
pub use config::{Credentials, PetFriendsConfig};
pub use core_types::{
    ApiResponse, AuthKey, Pet, PetFields, PetFilter, PetFriendsApi, PetList, ResponseBody,
};
pub use error::{PetFriendsError, PetFriendsResult};
pub use scenarios::{Scenario, ScenarioOutcome, ScenarioReport, ScenarioRunner, SuiteReport};
