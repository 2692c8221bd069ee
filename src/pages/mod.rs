//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, fetches, redirects)
//! and delegates rendering details to `components`.

pub mod campaigns;
pub mod dashboard;
pub mod home;
pub mod influencers;
pub mod login;
pub mod profile;
pub mod register;
