//! SLM - Switch library manager core.
//!
//! Startup and persistent configuration for the library manager:
//!
//! - JSON settings document with tolerant loading and atomic saves
//! - Release checks and ETag-based catalog refreshes
//! - Front-end selection and a text console
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slm::settings::SettingsStore;
//!
//! // Read (or create) settings.json in the working directory
//! let mut store = SettingsStore::new(".");
//! let settings = store.load();
//! println!("Page size: {}", settings.gui_page_size);
//! ```

/// Application startup and front-end dispatch.
pub mod bootstrap;

/// Command-line flags and the console front end.
pub mod cli;

/// Core error types and result aliases.
pub mod core;

/// Release and catalog freshness checks.
pub mod freshness;

/// Settings document and its store.
pub mod settings;

/// Re-exported core types for convenience.
pub use core::{Result, SlmError};
