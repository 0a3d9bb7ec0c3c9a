//! Core types shared by the client and the scenarios
//!
//! ## Organization
//! - `api` - The `PetFriendsApi` trait
//! - `models` - Wire records and the status/body response pair

pub mod api;
pub mod models;

pub use api::PetFriendsApi;
#[cfg(test)]
pub use api::MockPetFriendsApi;
pub use models::{ApiResponse, AuthKey, Pet, PetFields, PetFilter, PetList, ResponseBody};
