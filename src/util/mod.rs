//! Leptos glue between the core state and the router.

pub mod route_guard;
