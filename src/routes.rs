//! Client-side route table.
//!
//! Seven static paths, one page each. [`AppRoute::resolve`] mirrors how the
//! router matches: exact path, first match wins, no nested or catch-all routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Dashboard,
    Campaigns,
    Influencers,
    Profile,
}

impl AppRoute {
    /// Declaration order, which is also match order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Campaigns,
        Self::Influencers,
        Self::Profile,
    ];

    /// Path segment handed to `StaticSegment` (empty for `/`).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Campaigns => "campaigns",
            Self::Influencers => "influencers",
            Self::Profile => "profile",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Campaigns => "/campaigns",
            Self::Influencers => "/influencers",
            Self::Profile => "/profile",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Campaigns => "Campaigns",
            Self::Influencers => "Influencers",
            Self::Profile => "Profile",
        }
    }

    /// Routes whose pages send signed-out visitors to `/login`.
    pub const fn requires_user(self) -> bool {
        matches!(self, Self::Dashboard | Self::Campaigns | Self::Influencers | Self::Profile)
    }

    /// Routes listed in the navigation bar.
    pub const fn in_nav(self) -> bool {
        matches!(self, Self::Dashboard | Self::Campaigns | Self::Influencers)
    }

    /// Match a location path. A trailing slash is ignored except on `/` itself.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}
