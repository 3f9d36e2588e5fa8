//! NEIS open-data hub: school search, monthly menus and academic schedules.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`NeisApi`] trait, not on [`NeisClient`], so the
//! month orchestration and routes can be exercised with an in-memory mock.
//!
//! ERROR HANDLING
//! ==============
//! The menu fetch reports transport failure, error statuses and unreadable
//! bodies as `Err` so callers can tell "hub unreachable" from "no menu this
//! month". The schedule fetch never
//! fails; any problem degrades to an empty map with a warning.

pub mod client;
pub mod codes;
pub mod config;
pub mod parse;
pub mod types;

pub use client::NeisClient;
pub use codes::{MealKind, OFFICES, Office, default_office, office_by_code};
pub use config::NeisConfig;
pub use types::{NeisApi, NeisError, School};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_tests;
