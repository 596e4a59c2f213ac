#![cfg_attr(not(test), forbid(unsafe_code))]
//! Core of the back-office dashboard shell.
//!
//! Everything here is target-agnostic so the web front end and the CLI drive
//! the same session stores, route table, and navigation guard.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod guard;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod api_test;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod guard_test;

pub use api::{ApiClient, RemoteTokenValidator, TokenValidator};
pub use error::{ApiError, ConfigError, RouteError, StorageError};
pub use guard::{Disposition, GuardPhase, NavigationAttempt, NavigationGuard, NavigationRequest};
pub use routes::{RouteDescriptor, RouteTable};
pub use state::AppState;
