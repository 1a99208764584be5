pub mod check;
pub mod diff;
pub mod env_helpers;
pub mod export;
pub mod list;
pub mod show;
pub mod urls;
