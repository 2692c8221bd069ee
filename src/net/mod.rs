//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves requests over the wire, `error` classifies failures,
//! `types` defines the wire schema, and `api` holds the authenticated
//! resource calls that pages use.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
