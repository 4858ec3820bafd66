//! Route-level page components.
//!
//! Pages are a thin shell: they read services from context and render what
//! the clients return.

pub mod colleges;
pub mod diagnostics;
pub mod home;
pub mod login;
