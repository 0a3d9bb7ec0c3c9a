//! Key issuance scenarios

use super::assertions::{expect_non_empty_field, expect_status};
use super::context::ScenarioContext;
use crate::error::PetFriendsResult;

pub(super) async fn get_api_key_for_valid_user(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let credentials = &ctx.config().credentials;
    let response = ctx
        .api()
        .get_api_key(&credentials.email, &credentials.password)
        .await?;

    expect_status(&response, 200, "get_api_key")?;
    expect_non_empty_field(&response, "key")
}

pub(super) async fn get_api_key_with_invalid_password(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let email = &ctx.config().credentials.email;
    let response = ctx.api().get_api_key(email, "invalid").await?;
    expect_status(&response, 403, "get_api_key")
}

pub(super) async fn get_api_key_with_empty_email(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let password = &ctx.config().credentials.password;
    let response = ctx.api().get_api_key("", password).await?;
    expect_status(&response, 403, "get_api_key")
}

pub(super) async fn get_api_key_with_empty_password(
    ctx: &mut ScenarioContext<'_>,
) -> PetFriendsResult<()> {
    let email = &ctx.config().credentials.email;
    let response = ctx.api().get_api_key(email, "").await?;
    expect_status(&response, 403, "get_api_key")
}
