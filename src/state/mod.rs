//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` owns the persisted tokens behind an injectable handle,
//! `events` carries the typed logout notification to whoever listens, and
//! `auth` is the reactive projection views render from.

pub mod auth;
pub mod events;
pub mod session;
