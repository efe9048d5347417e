//! Shared types, error model, and configuration for StaffQuery.
//!
//! This crate is the foundation depended on by the other StaffQuery crates.
//! It provides:
//! - [`StaffQueryError`] — the unified error type
//! - Domain types ([`Employee`], [`EmployeeId`], [`Roster`])
//! - Configuration ([`AppConfig`], [`RunSettings`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, OutputFormat, RosterConfig, RunSettings, config_dir,
    config_file_path, init_config, init_config_in, load_config, load_config_from,
};
pub use error::{Result, StaffQueryError, require};
pub use types::{Employee, EmployeeId, Roster, format_amount};
