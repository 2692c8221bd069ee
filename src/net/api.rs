//! Authenticated REST calls used by the listing and profile pages.
//!
//! Every call goes through [`SessionClient::send_authorized`], which attaches
//! the stored bearer token. A rejected token here is reported to the caller;
//! only [`SessionClient::current_user`] clears the session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::transport::ApiRequest;
use super::types::{CampaignList, CampaignStatus, Influencer, ProfileUpdate, User};
use crate::config::ApiConfig;
use crate::session::SessionClient;

fn campaigns_endpoint(config: &ApiConfig, status: Option<CampaignStatus>) -> String {
    let url = config.endpoint("campaigns/");
    match status {
        Some(status) => format!("{url}?status={}", status.as_str()),
        None => url,
    }
}

fn influencers_endpoint(config: &ApiConfig) -> String {
    config.endpoint("influencers/")
}

/// List campaigns, optionally filtered by status, via `GET /campaigns/`.
///
/// # Errors
///
/// Returns the transport error, a non-2xx [`ApiError::Status`], or
/// [`ApiError::Decode`] if the listing has an unexpected shape.
pub async fn fetch_campaigns(
    session: &SessionClient,
    status: Option<CampaignStatus>,
) -> Result<CampaignList, ApiError> {
    let url = campaigns_endpoint(session.config(), status);
    session.send_authorized(ApiRequest::get(url)).await?.json()
}

/// List influencer profiles via `GET /influencers/`.
///
/// # Errors
///
/// Returns the transport error, a non-2xx [`ApiError::Status`], or
/// [`ApiError::Decode`] if the listing has an unexpected shape.
pub async fn fetch_influencers(session: &SessionClient) -> Result<Vec<Influencer>, ApiError> {
    let url = influencers_endpoint(session.config());
    session.send_authorized(ApiRequest::get(url)).await?.json()
}

/// Update the signed-in account via `PUT /users/me` and return the saved user.
///
/// # Errors
///
/// Returns the transport error, a non-2xx [`ApiError::Status`], or
/// [`ApiError::Decode`] if the response is not a user.
pub async fn update_current_user(session: &SessionClient, update: &ProfileUpdate) -> Result<User, ApiError> {
    let request = ApiRequest::put(session.config().current_user_url()).json(update)?;
    session.send_authorized(request).await?.json()
}
