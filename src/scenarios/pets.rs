//! Pet listing, creation, update and deletion scenarios

use super::assertions::{
    expect_field, expect_non_empty_field, expect_pet_list, expect_rejected, expect_status,
};
use super::context::ScenarioContext;
use crate::core_types::{AuthKey, PetFields, PetFilter};
use crate::error::{PetFriendsError, PetFriendsResult};

pub(super) const VALID_PHOTO: &str = "cat1.jpg";
pub(super) const NON_IMAGE_PHOTO: &str = "cat1.txt";
pub(super) const NON_ASCII_PHOTO: &str = "кот.jpg";

pub(super) async fn get_all_pets_with_valid_key(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let response = ctx.api().get_list_of_pets(&auth_key, PetFilter::All).await?;

    expect_status(&response, 200, "get_list_of_pets")?;
    expect_pet_list(&response)?;
    Ok(())
}

pub(super) async fn get_all_pets_with_invalid_key(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let auth_key = AuthKey::new("invalid_key");

    for filter in [PetFilter::All, PetFilter::MyPets] {
        let response = ctx.api().get_list_of_pets(&auth_key, filter).await?;
        expect_status(
            &response,
            403,
            &format!("get_list_of_pets(filter='{}')", filter.as_query_value()),
        )?;
    }
    Ok(())
}

pub(super) async fn get_all_pets_with_filter_my_pets(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    ctx.ensure_my_pet(&auth_key).await?;

    let response = ctx
        .api()
        .get_list_of_pets(&auth_key, PetFilter::MyPets)
        .await?;

    expect_status(&response, 200, "get_list_of_pets(filter='my_pets')")?;
    let list = expect_pet_list(&response)?;
    if list.pets.is_empty() {
        return Err(PetFriendsError::assertion_failed(
            "my_pets is empty although the account owns at least one pet",
        ));
    }
    Ok(())
}

pub(super) async fn add_new_pet_with_valid_data(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let photo = ctx.fixture(VALID_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("Барсик", "кот", 4);

    let response = ctx.api().add_new_pet(&auth_key, &pet, &photo).await?;
    ctx.track_created(&auth_key, &response);

    expect_status(&response, 200, "add_new_pet")?;
    expect_field(&response, "name", &pet.name)
}

pub(super) async fn add_new_pet_without_photo(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("Барсик", "кот", 4);

    let response = ctx.api().add_new_pet_no_photo(&auth_key, &pet).await?;
    ctx.track_created(&auth_key, &response);

    expect_status(&response, 200, "add_new_pet_no_photo")?;
    expect_field(&response, "name", &pet.name)?;
    expect_field(&response, "animal_type", &pet.animal_type)?;
    expect_field(&response, "age", &pet.age)
}

pub(super) async fn add_new_pet_with_empty_data(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let photo = ctx.fixture(VALID_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("", "", "");

    let response = ctx.api().add_new_pet(&auth_key, &pet, &photo).await?;
    ctx.track_created(&auth_key, &response);

    expect_rejected(&response, "add_new_pet with empty fields")
}

pub(super) async fn add_new_pet_with_large_age(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let photo = ctx.fixture(VALID_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("Барсик", "кот", "1000");

    let response = ctx.api().add_new_pet(&auth_key, &pet, &photo).await?;
    ctx.track_created(&auth_key, &response);

    expect_rejected(&response, "add_new_pet with age 1000")
}

pub(super) async fn add_pet_with_invalid_photo_format(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let photo = ctx.fixture(NON_IMAGE_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("Бублик", "котяра", 5);

    let response = ctx.api().add_new_pet(&auth_key, &pet, &photo).await?;
    ctx.track_created(&auth_key, &response);

    expect_rejected(&response, "add_new_pet with a .txt photo")
}

pub(super) async fn add_pet_with_non_ascii_photo_name(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let photo = ctx.fixture(NON_ASCII_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = PetFields::new("Бублик", "котяра", 5);

    let response = ctx.api().add_new_pet(&auth_key, &pet, &photo).await?;
    ctx.track_created(&auth_key, &response);

    expect_status(&response, 200, "add_new_pet with a non-ASCII file name")
}

pub(super) async fn update_self_pet_info(ctx: &mut ScenarioContext<'_>) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let pet = ctx.create_scratch_pet(&auth_key).await?;
    let update = PetFields::new("Мурзик", "кот", 5);

    let response = ctx
        .api()
        .update_pet_info(&auth_key, &pet.id, &update)
        .await?;

    expect_status(&response, 200, "update_pet_info")?;
    expect_field(&response, "name", &update.name)
}

pub(super) async fn update_pet_with_invalid_age(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let pet = ctx.create_scratch_pet(&auth_key).await?;
    let update = PetFields::new("Барсик", "кот", -1);

    let response = ctx
        .api()
        .update_pet_info(&auth_key, &pet.id, &update)
        .await?;

    expect_rejected(&response, "update_pet_info with age -1")
}

pub(super) async fn delete_self_pet(ctx: &mut ScenarioContext<'_>) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let pet = ctx.create_scratch_pet(&auth_key).await?;

    let response = ctx.api().delete_pet(&auth_key, &pet.id).await?;
    expect_status(&response, 200, "delete_pet")?;
    ctx.forget(&pet.id);

    let relist = ctx
        .api()
        .get_list_of_pets(&auth_key, PetFilter::MyPets)
        .await?;
    expect_status(&relist, 200, "get_list_of_pets(filter='my_pets') after deletion")?;
    let remaining = expect_pet_list(&relist)?;
    if remaining.pets.iter().any(|p| p.id == pet.id) {
        return Err(PetFriendsError::assertion_failed(format!(
            "pet {} is still listed in my_pets after deletion",
            pet.id
        )));
    }
    Ok(())
}

pub(super) async fn delete_nonexistent_pet(ctx: &mut ScenarioContext<'_>) -> PetFriendsResult<()> {
    let auth_key = ctx.acquire_key().await?;
    let response = ctx.api().delete_pet(&auth_key, "invalid_id").await?;
    expect_status(&response, 404, "delete_pet for a nonexistent id")
}

pub(super) async fn set_photo_for_self_pet(ctx: &mut ScenarioContext<'_>) -> PetFriendsResult<()> {
    let photo = ctx.fixture(VALID_PHOTO)?;
    let auth_key = ctx.acquire_key().await?;
    let pet = ctx.create_scratch_pet(&auth_key).await?;

    let response = ctx.api().set_pet_photo(&auth_key, &pet.id, &photo).await?;

    expect_status(&response, 200, "set_pet_photo")?;
    expect_non_empty_field(&response, "pet_photo")
}
