//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and listing cards while reading shared
//! state (`AuthState`, `SessionClient`) from Leptos context providers.

pub mod campaign_card;
pub mod influencer_card;
pub mod layout;
pub mod list_notice;
pub mod require_user;
