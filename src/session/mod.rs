//! Browser session: the bearer token, where it lives, and the calls that
//! create, use, and discard it.
//!
//! ARCHITECTURE
//! ============
//! `state` is the pure Unauthenticated/Authenticated model, `storage` is the
//! token persistence seam, and `client` combines both with a transport into
//! the operations pages call.

pub mod client;
pub mod state;
pub mod storage;

pub use client::SessionClient;
pub use state::{AuthHeader, SessionState};
pub use storage::{LocalTokenStore, MemoryTokenStore, TOKEN_STORAGE_KEY, TokenStore};
