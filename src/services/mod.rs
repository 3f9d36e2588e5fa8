//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the fetch-and-render flow so route handlers can stay
//! focused on query parsing and response shaping.

pub mod month;
