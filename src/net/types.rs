//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Response types default every field the UI can live without, so a server
//! that adds, renames, or omits a column does not turn a valid response into
//! a decode failure. Request types serialize exactly the fields the API reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Login response, kept exactly as the server sent it.
///
/// Only `access_token` is interpreted, and only when it is a string. Any other
/// shape is still a successful login that simply yields no token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthResponse(serde_json::Value);

impl AuthResponse {
    /// Wrap a 2xx body. Text that is not JSON is kept as a JSON string.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        Self(serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_owned())))
    }

    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(serde_json::Value::as_str)
    }

    pub fn token_type(&self) -> Option<&str> {
        self.0.get("token_type").and_then(serde_json::Value::as_str)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// Account role. Unknown roles from the server decode as [`UserRole::Unknown`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Brand,
    Influencer,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Roles a visitor may pick when signing up.
    pub const SELECTABLE: [Self; 2] = [Self::Brand, Self::Influencer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Brand => "brand",
            Self::Influencer => "influencer",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Brand => "Brand",
            Self::Influencer => "Influencer",
            Self::Unknown => "Member",
        }
    }

    /// Parse a form value; only [`UserRole::SELECTABLE`] roles are accepted.
    pub fn from_form(raw: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|role| role.as_str() == raw.trim())
    }
}

/// The signed-in account as returned by `GET /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Some API versions name the primary key `user_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.user_id)
    }

    /// Full name when set, otherwise the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }
}

/// Body of `PUT /users/me`. Unset fields are left unchanged by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub const ALL: [Self; 5] = [Self::Draft, Self::Active, Self::Paused, Self::Completed, Self::Cancelled];

    /// Query-string form, e.g. `ACTIVE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: CampaignStatus,
    /// ISO 8601 date.
    #[serde(default)]
    pub start_date: String,
    /// ISO 8601 date.
    #[serde(default)]
    pub end_date: String,
    /// Budget in KRW.
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub max_participants: i64,
    #[serde(default)]
    pub requirements: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Paged campaign listing from `GET /campaigns/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignList {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub items: Vec<Campaign>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluencerStats {
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub following: i64,
    #[serde(default)]
    pub total_posts: i64,
    #[serde(default)]
    pub average_likes: i64,
    #[serde(default)]
    pub average_comments: i64,
    /// Percentage, e.g. `3.5` for 3.5%.
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluencerPlatform {
    pub platform_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_url: String,
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub posts: i64,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<InfluencerPlatform>,
    #[serde(default)]
    pub stats: InfluencerStats,
    #[serde(default = "default_true")]
    pub available_for_collaboration: bool,
    #[serde(default)]
    pub minimum_fee: Option<f64>,
    #[serde(default)]
    pub maximum_fee: Option<f64>,
}

impl Influencer {
    /// Follower count from stats, or the sum across platforms when stats are empty.
    pub fn total_followers(&self) -> i64 {
        if self.stats.followers > 0 {
            self.stats.followers
        } else {
            self.platforms.iter().map(|p| p.followers).sum()
        }
    }
}

fn default_true() -> bool {
    true
}
