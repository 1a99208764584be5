//! Typed environment settings for the Coffee Shop client.
//!
//! The [`EnvironmentSettings`] record carries the API base URL and the
//! identity-provider parameters. Built-in variants live in
//! [`variants`]; the cargo feature `production` selects
//! [`variants::ACTIVE`] at compile time, and [`registry::install`] lets
//! an application select one explicitly at startup.
//!
//! ```
//! use brewenv::variants::DEVELOPMENT;
//!
//! assert_eq!(DEVELOPMENT.api_server_url, "http://127.0.0.1:5000");
//! assert!(!DEVELOPMENT.production);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;

pub use domain::errors::{BrewenvError, Result};
pub use domain::models::build_mode::BuildMode;
pub use domain::models::environment::{AuthSettings, EnvironmentSettings};
pub use domain::models::field::SettingField;
pub use domain::{registry, variants};
