//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the signed-in user, `listing` for
//! remote collections) so pages depend on small focused models provided
//! through Leptos context or held locally.

pub mod auth;
pub mod listing;
