//! Networking modules for the auth and resource REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the async seam over the browser fetch API, `authenticator`
//! decorates it with the session's bearer credential, and `credentials` /
//! `resources` are the two service clients built on top. `types` defines the
//! shared wire schema.

pub mod authenticator;
pub mod credentials;
pub mod resources;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_transport;
